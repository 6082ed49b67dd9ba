//! Driving port for the service catalogue.

use async_trait::async_trait;

use crate::domain::{ClinicService, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceCatalogueQuery: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ClinicService>, Error>;
}
