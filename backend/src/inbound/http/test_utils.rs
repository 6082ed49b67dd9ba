//! Test helpers for inbound HTTP components.
//!
//! Handlers are exercised through the real `/api/v1` scope with every port
//! replaced by a `mockall` double. Mocks without expectations panic when
//! called, which doubles as an assertion that validation short-circuits.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use serde::de::DeserializeOwned;

use super::api_scope;
use super::state::HttpState;
use crate::Trace;
use crate::domain::ports::{
    MockAppointmentsCommand, MockAppointmentsQuery, MockAuthCommand, MockDoctorDirectoryQuery,
    MockFaqQuery, MockServiceCatalogueQuery,
};

/// Mock driving ports, one per [`HttpState`] field.
#[derive(Default)]
pub struct TestPorts {
    pub auth: MockAuthCommand,
    pub doctors: MockDoctorDirectoryQuery,
    pub appointments: MockAppointmentsCommand,
    pub appointments_query: MockAppointmentsQuery,
    pub faq: MockFaqQuery,
    pub services: MockServiceCatalogueQuery,
}

impl TestPorts {
    /// Wrap the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState {
            auth: Arc::new(self.auth),
            doctors: Arc::new(self.doctors),
            appointments: Arc::new(self.appointments),
            appointments_query: Arc::new(self.appointments_query),
            faq: Arc::new(self.faq),
            services: Arc::new(self.services),
        }
    }
}

/// Send `request` through the API scope backed by `ports`.
pub async fn call(ports: TestPorts, request: TestRequest) -> ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

/// Decode a JSON response body.
pub async fn body_json<T: DeserializeOwned>(response: ServiceResponse) -> T {
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
