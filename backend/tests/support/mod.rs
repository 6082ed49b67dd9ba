//! Shared wiring for end-to-end HTTP tests over the in-memory clinic.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

use clinic_backend::Trace;
use clinic_backend::domain::{
    AppointmentService, AuthenticationService, Doctor, DoctorDirectoryService, DoctorId,
    DoctorPicker, FaqService, ServiceCatalogueService,
};
use clinic_backend::inbound::http::api_scope;
use clinic_backend::inbound::http::state::HttpState;
use clinic_backend::test_support::{FixedClock, InMemoryClinic};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn doctor(id: i32, name: &str, specialization: &str, available: bool) -> Doctor {
    Doctor {
        id: DoctorId::new(id),
        full_name: name.to_owned(),
        specialization: specialization.to_owned(),
        experience_years: 5,
        photo_url: None,
        description: None,
        available,
    }
}

/// Real domain services over one shared in-memory clinic.
pub fn state(
    clinic: &Arc<InMemoryClinic>,
    picker: Arc<dyn DoctorPicker>,
    clock: Arc<FixedClock>,
) -> HttpState {
    let appointments = Arc::new(AppointmentService::new(Arc::clone(clinic), picker, clock));
    HttpState {
        auth: Arc::new(AuthenticationService::new(Arc::clone(clinic))),
        doctors: Arc::new(DoctorDirectoryService::new(Arc::clone(clinic))),
        appointments: appointments.clone(),
        appointments_query: appointments,
        faq: Arc::new(FaqService::new(Arc::clone(clinic))),
        services: Arc::new(ServiceCatalogueService::new(Arc::clone(clinic))),
    }
}

pub async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await
}

pub async fn send<S>(app: &S, request: TestRequest) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    actix_test::call_service(app, request.to_request()).await
}

pub async fn body_json<T: DeserializeOwned>(response: ServiceResponse) -> T {
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
