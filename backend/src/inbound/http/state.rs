//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AppointmentsCommand, AppointmentsQuery, AuthCommand, DoctorDirectoryQuery, FaqQuery,
    ServiceCatalogueQuery,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use clinic_backend::domain::{
///     AppointmentService, AuthenticationService, DoctorDirectoryService, FaqService,
///     ServiceCatalogueService, UniformDoctorPicker,
/// };
/// use clinic_backend::inbound::http::state::HttpState;
/// use clinic_backend::outbound::persistence::{
///     DbPool, DieselAppointmentRepository, DieselClinicServiceRepository,
///     DieselDoctorRepository, DieselFaqRepository, DieselUserRepository,
/// };
/// use mockable::DefaultClock;
///
/// fn build(pool: DbPool) -> HttpState {
///     let appointments = Arc::new(AppointmentService::new(
///         Arc::new(DieselAppointmentRepository::new(pool.clone())),
///         Arc::new(UniformDoctorPicker),
///         Arc::new(DefaultClock),
///     ));
///     HttpState {
///         auth: Arc::new(AuthenticationService::new(Arc::new(DieselUserRepository::new(
///             pool.clone(),
///         )))),
///         doctors: Arc::new(DoctorDirectoryService::new(Arc::new(
///             DieselDoctorRepository::new(pool.clone()),
///         ))),
///         appointments: appointments.clone(),
///         appointments_query: appointments,
///         faq: Arc::new(FaqService::new(Arc::new(DieselFaqRepository::new(pool.clone())))),
///         services: Arc::new(ServiceCatalogueService::new(Arc::new(
///             DieselClinicServiceRepository::new(pool),
///         ))),
///     }
/// }
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthCommand>,
    pub doctors: Arc<dyn DoctorDirectoryQuery>,
    pub appointments: Arc<dyn AppointmentsCommand>,
    pub appointments_query: Arc<dyn AppointmentsQuery>,
    pub faq: Arc<dyn FaqQuery>,
    pub services: Arc<dyn ServiceCatalogueQuery>,
}
