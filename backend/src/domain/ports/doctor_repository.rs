//! Read-side port for the doctor directory.

use async_trait::async_trait;

use crate::domain::Doctor;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading doctors.
    pub enum DoctorRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "doctor repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "doctor repository query failed: {message}",
    }
    reported_as internal;
}

/// Port for reading doctor rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Doctors flagged as available, ordered by full name.
    async fn list_available(&self) -> Result<Vec<Doctor>, DoctorRepositoryError>;
}
