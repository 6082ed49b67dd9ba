//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every clinic endpoint and its wire schemas. The
//! document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::appointments::{
    AppointmentListItem, AssignedDoctorBody, BookAppointmentRequest, BookedAppointmentBody,
    ClinicAppointmentListItem,
};
use crate::inbound::http::auth::{AuthAction, AuthRequest, AuthResponse, AuthUserBody};
use crate::inbound::http::doctors::DoctorBody;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::faq::FaqEntryBody;
use crate::inbound::http::services::ClinicServiceBody;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Describe the identity token header accepted by CORS preflights.
struct IdentityTokenAddon;

impl Modify for IdentityTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "IdentityToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Auth-Token",
                "Base64 of `user_id:email` returned by POST /api/v1/auth. \
                 Unsigned; the server does not verify it.",
            ))),
        );
    }
}

/// OpenAPI document for the clinic REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&IdentityTokenAddon),
    info(
        title = "Clinic backend API",
        description = "Registration, doctor directory, appointment booking, FAQ and service catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::authenticate,
        crate::inbound::http::auth::preflight,
        crate::inbound::http::doctors::list_doctors,
        crate::inbound::http::doctors::preflight,
        crate::inbound::http::appointments::list_appointments,
        crate::inbound::http::appointments::book_appointment,
        crate::inbound::http::appointments::preflight,
        crate::inbound::http::faq::list_faq,
        crate::inbound::http::faq::preflight,
        crate::inbound::http::services::list_services,
        crate::inbound::http::services::preflight,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorBody,
        AuthAction,
        AuthRequest,
        AuthResponse,
        AuthUserBody,
        DoctorBody,
        AppointmentListItem,
        ClinicAppointmentListItem,
        BookAppointmentRequest,
        BookedAppointmentBody,
        AssignedDoctorBody,
        FaqEntryBody,
        ClinicServiceBody,
    )),
    tags(
        (name = "auth", description = "Patient registration and login"),
        (name = "doctors", description = "Doctor directory"),
        (name = "appointments", description = "Appointment booking and listing"),
        (name = "faq", description = "Frequently asked questions"),
        (name = "services", description = "Service catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
