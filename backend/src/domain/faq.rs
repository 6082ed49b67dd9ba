//! Frequently asked questions.

/// A question and its answer, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
}
