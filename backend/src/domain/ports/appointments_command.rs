//! Driving port for booking appointments.

use async_trait::async_trait;

use crate::domain::{BookedAppointment, BookingRequest, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsCommand: Send + Sync {
    /// Book a visit with an automatically assigned doctor.
    ///
    /// Fails with [`crate::domain::ErrorCode::ServiceUnavailable`] when no
    /// doctor is available.
    async fn book(&self, request: BookingRequest) -> Result<BookedAppointment, Error>;
}
