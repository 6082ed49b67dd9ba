//! Appointment domain services implementing the booking and listing ports.
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{AppointmentRepository, AppointmentsCommand, AppointmentsQuery};
use crate::domain::{
    AppointmentRecord, AppointmentScope, BookedAppointment, BookingRequest, DoctorPicker, Error,
};

/// Message returned when no doctor can take the appointment.
pub const NO_AVAILABLE_DOCTORS_MESSAGE: &str = "No available doctors";

/// Appointment service implementing both appointment driving ports.
#[derive(Clone)]
pub struct AppointmentService<R> {
    appointments: Arc<R>,
    picker: Arc<dyn DoctorPicker>,
    clock: Arc<dyn Clock>,
}

impl<R> AppointmentService<R> {
    /// Create a new service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use clinic_backend::domain::{AppointmentService, UniformDoctorPicker};
    /// # use clinic_backend::outbound::persistence::{DbPool, DieselAppointmentRepository};
    /// # use mockable::DefaultClock;
    /// # fn example(pool: DbPool) {
    /// let service = AppointmentService::new(
    ///     Arc::new(DieselAppointmentRepository::new(pool)),
    ///     Arc::new(UniformDoctorPicker),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(
        appointments: Arc<R>,
        picker: Arc<dyn DoctorPicker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            appointments,
            picker,
            clock,
        }
    }
}

#[async_trait]
impl<R> AppointmentsCommand for AppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn book(&self, request: BookingRequest) -> Result<BookedAppointment, Error> {
        let user_id = request.user_id();
        let draft = request.into_draft(self.clock.utc());
        let booked = self
            .appointments
            .book(draft, self.picker.as_ref())
            .await?;

        match booked {
            Some(appointment) => {
                info!(
                    appointment_id = appointment.id.get(),
                    doctor_id = %appointment.doctor_id(),
                    %user_id,
                    "appointment booked"
                );
                Ok(appointment)
            }
            None => {
                warn!(%user_id, "booking rejected: no available doctors");
                Err(Error::service_unavailable(NO_AVAILABLE_DOCTORS_MESSAGE))
            }
        }
    }
}

#[async_trait]
impl<R> AppointmentsQuery for AppointmentService<R>
where
    R: AppointmentRepository,
{
    async fn list_appointments(
        &self,
        scope: AppointmentScope,
    ) -> Result<Vec<AppointmentRecord>, Error> {
        self.appointments.list(scope).await.map_err(Error::from)
    }
}
