//! Port abstraction for appointment persistence.
//!
//! Booking is a single port call so adapters can load the candidate doctors
//! and insert the appointment on one connection. The domain still owns the
//! choice of doctor through [`DoctorPicker`].

use async_trait::async_trait;

use crate::domain::{
    AppointmentDraft, AppointmentRecord, AppointmentScope, BookedAppointment, DoctorPicker,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by appointment repository adapters.
    pub enum AppointmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "appointment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "appointment repository query failed: {message}",
    }
    reported_as internal;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// List appointments for `scope`, newest `created_at` first.
    async fn list(
        &self,
        scope: AppointmentScope,
    ) -> Result<Vec<AppointmentRecord>, AppointmentRepositoryError>;

    /// Assign an available doctor chosen by `picker` and insert the draft.
    ///
    /// Returns `Ok(None)` when no doctor is available; nothing is written.
    async fn book(
        &self,
        draft: AppointmentDraft,
        picker: &dyn DoctorPicker,
    ) -> Result<Option<BookedAppointment>, AppointmentRepositoryError>;
}
