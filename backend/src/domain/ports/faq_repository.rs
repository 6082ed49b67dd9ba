//! Read-side port for FAQ entries.

use async_trait::async_trait;

use crate::domain::FaqEntry;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading FAQ entries.
    pub enum FaqRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "faq repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "faq repository query failed: {message}",
    }
    reported_as internal;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Every entry ordered by category, then id.
    async fn list_all(&self) -> Result<Vec<FaqEntry>, FaqRepositoryError>;
}
