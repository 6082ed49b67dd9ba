//! Doctor read models.

use std::fmt;

/// Database identifier of a doctor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoctorId(i32);

impl DoctorId {
    /// Wrap a raw identifier loaded from storage.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory entry describing a doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub full_name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub available: bool,
}

/// Minimal view of a doctor that may receive a new appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDoctor {
    pub id: DoctorId,
    pub full_name: String,
    pub specialization: String,
}
