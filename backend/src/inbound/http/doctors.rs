//! Doctor directory handler.
//!
//! ```text
//! OPTIONS /api/v1/doctors
//! GET     /api/v1/doctors
//! ```

use actix_web::{HttpResponse, Resource, http::Method, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Doctor;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{CorsPolicy, json_ok};
use crate::inbound::http::error::{ErrorBody, method_not_allowed};
use crate::inbound::http::state::HttpState;

const CORS: CorsPolicy = CorsPolicy::READ_ONLY;

/// Doctor entry as returned by the directory.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DoctorBody {
    pub id: i32,
    #[schema(example = "Dr Grace Hopper")]
    pub full_name: String,
    #[schema(example = "Cardiology")]
    pub specialization: String,
    pub experience_years: i32,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub available: bool,
}

impl From<Doctor> for DoctorBody {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            full_name: doctor.full_name,
            specialization: doctor.specialization,
            experience_years: doctor.experience_years,
            photo_url: doctor.photo_url,
            description: doctor.description,
            available: doctor.available,
        }
    }
}

/// List doctors currently accepting appointments, ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/doctors",
    responses(
        (status = 200, description = "Available doctors", body = [DoctorBody]),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["doctors"],
    operation_id = "listDoctors",
    security([])
)]
pub async fn list_doctors(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let doctors = state.doctors.available_doctors().await?;
    let body: Vec<DoctorBody> = doctors.into_iter().map(DoctorBody::from).collect();
    Ok(json_ok(&body))
}

/// CORS preflight for the doctor directory.
#[utoipa::path(
    options,
    path = "/api/v1/doctors",
    responses((status = 200, description = "Preflight accepted")),
    tags = ["doctors"],
    operation_id = "doctorsPreflight",
    security([])
)]
pub async fn preflight() -> HttpResponse {
    CORS.preflight()
}

/// Resource serving `/doctors`.
pub fn resource() -> Resource {
    web::resource("/doctors")
        .route(web::get().to(list_doctors))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}
