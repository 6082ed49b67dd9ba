//! Driving port for appointment listings.

use async_trait::async_trait;

use crate::domain::{AppointmentRecord, AppointmentScope, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsQuery: Send + Sync {
    /// Appointments visible for `scope`, newest first.
    async fn list_appointments(
        &self,
        scope: AppointmentScope,
    ) -> Result<Vec<AppointmentRecord>, Error>;
}
