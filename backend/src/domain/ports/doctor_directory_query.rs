//! Driving port for the public doctor directory.

use async_trait::async_trait;

use crate::domain::{Doctor, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorDirectoryQuery: Send + Sync {
    /// Doctors currently accepting appointments, ordered by name.
    async fn available_doctors(&self) -> Result<Vec<Doctor>, Error>;
}
