//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use clinic_backend::domain::ports::{
    AppointmentRepository, ClinicServiceRepository, DoctorRepository, FaqRepository,
    UserRepository,
};
use clinic_backend::domain::{
    AppointmentService, AuthenticationService, DoctorDirectoryService, DoctorPicker, FaqService,
    ServiceCatalogueService, UniformDoctorPicker,
};
use clinic_backend::inbound::http::state::HttpState;
use clinic_backend::outbound::persistence::{
    DbPool, DieselAppointmentRepository, DieselClinicServiceRepository, DieselDoctorRepository,
    DieselFaqRepository, DieselUserRepository,
};

/// One repository per driven port.
pub(super) struct ClinicRepositories<U, D, A, F, S> {
    pub users: Arc<U>,
    pub doctors: Arc<D>,
    pub appointments: Arc<A>,
    pub faq: Arc<F>,
    pub services: Arc<S>,
}

/// Wrap repositories in their domain services.
pub(super) fn assemble_http_state<U, D, A, F, S>(
    repos: ClinicRepositories<U, D, A, F, S>,
    picker: Arc<dyn DoctorPicker>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    D: DoctorRepository + 'static,
    A: AppointmentRepository + 'static,
    F: FaqRepository + 'static,
    S: ClinicServiceRepository + 'static,
{
    let ClinicRepositories {
        users,
        doctors,
        appointments,
        faq,
        services,
    } = repos;
    let appointments = Arc::new(AppointmentService::new(appointments, picker, clock));

    HttpState {
        auth: Arc::new(AuthenticationService::new(users)),
        doctors: Arc::new(DoctorDirectoryService::new(doctors)),
        appointments: appointments.clone(),
        appointments_query: appointments,
        faq: Arc::new(FaqService::new(faq)),
        services: Arc::new(ServiceCatalogueService::new(services)),
    }
}

/// Production state: Diesel repositories over `pool`, uniform doctor
/// assignment and the system clock.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let repos = ClinicRepositories {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        doctors: Arc::new(DieselDoctorRepository::new(pool.clone())),
        appointments: Arc::new(DieselAppointmentRepository::new(pool.clone())),
        faq: Arc::new(DieselFaqRepository::new(pool.clone())),
        services: Arc::new(DieselClinicServiceRepository::new(pool.clone())),
    };
    web::Data::new(assemble_http_state(
        repos,
        Arc::new(UniformDoctorPicker),
        Arc::new(DefaultClock),
    ))
}
