//! Read-side port for the service catalogue.

use async_trait::async_trait;

use crate::domain::ClinicService;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the service catalogue.
    pub enum ClinicServiceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "service catalogue connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "service catalogue query failed: {message}",
    }
    reported_as internal;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicServiceRepository: Send + Sync {
    /// Every catalogue entry ordered by id.
    async fn list_all(&self) -> Result<Vec<ClinicService>, ClinicServiceRepositoryError>;
}
