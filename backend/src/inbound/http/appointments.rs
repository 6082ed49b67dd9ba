//! Appointment booking and listing handler.
//!
//! ```text
//! OPTIONS /api/v1/appointments
//! GET     /api/v1/appointments?user_id=7
//! GET     /api/v1/appointments
//! POST    /api/v1/appointments {"user_id":7,"symptoms":"cough","service_id":2}
//! ```
//!
//! The listing without `user_id` is the clinic-wide view and is not
//! restricted to staff; callers are trusted to choose the right scope.

use actix_web::{HttpResponse, Resource, http::Method, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    AppointmentRecord, AppointmentScope, BookedAppointment, BookingRequest,
    BookingValidationError, Error, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{CorsPolicy, json_ok};
use crate::inbound::http::error::{ErrorBody, method_not_allowed};
use crate::inbound::http::state::HttpState;

const CORS: CorsPolicy = CorsPolicy::READ_WRITE;

/// Query string for `GET /api/v1/appointments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListParams {
    /// Restrict the listing to one patient. Omit for the 50 most recent
    /// appointments across the clinic.
    #[param(example = "7")]
    pub user_id: Option<String>,
}

impl AppointmentListParams {
    fn scope(&self) -> Result<AppointmentScope, Error> {
        let raw = self.user_id.as_deref().map(str::trim).unwrap_or_default();
        let user_id = if raw.is_empty() {
            None
        } else {
            let id = raw
                .parse::<i32>()
                .ok()
                .and_then(|id| UserId::new(id).ok())
                .ok_or_else(|| Error::invalid_request("Invalid user_id"))?;
            Some(id)
        };
        Ok(AppointmentScope::from_user(user_id))
    }
}

/// One appointment in a patient's own listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentListItem {
    pub id: i32,
    pub symptoms: String,
    #[schema(example = "confirmed")]
    pub status: String,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub doctor_name: Option<String>,
    pub specialization: Option<String>,
    pub service_name: Option<String>,
}

/// One appointment in the clinic-wide listing, naming the patient.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClinicAppointmentListItem {
    pub patient_name: Option<String>,
    #[serde(flatten)]
    pub appointment: AppointmentListItem,
}

impl From<AppointmentRecord> for AppointmentListItem {
    fn from(record: AppointmentRecord) -> Self {
        Self {
            id: record.id.get(),
            symptoms: record.symptoms,
            status: record.status.as_str().to_owned(),
            scheduled_date: record.scheduled_date,
            created_at: record.created_at,
            doctor_name: record.doctor_name,
            specialization: record.specialization,
            service_name: record.service_name,
        }
    }
}

impl From<AppointmentRecord> for ClinicAppointmentListItem {
    fn from(mut record: AppointmentRecord) -> Self {
        Self {
            patient_name: record.patient_name.take(),
            appointment: record.into(),
        }
    }
}

/// Request body for `POST /api/v1/appointments`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct BookAppointmentRequest {
    #[schema(example = 7)]
    pub user_id: Option<i64>,
    #[schema(example = "Persistent cough for a week")]
    pub symptoms: Option<String>,
    pub service_id: Option<i64>,
}

/// Assigned doctor summary.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignedDoctorBody {
    pub name: String,
    pub specialization: String,
}

/// Response for a successful booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookedAppointmentBody {
    pub id: i32,
    pub symptoms: String,
    #[schema(example = "confirmed")]
    pub status: String,
    pub scheduled_date: DateTime<Utc>,
    pub doctor: AssignedDoctorBody,
}

impl From<BookedAppointment> for BookedAppointmentBody {
    fn from(booked: BookedAppointment) -> Self {
        Self {
            id: booked.id.get(),
            symptoms: booked.symptoms,
            status: booked.status.as_str().to_owned(),
            scheduled_date: booked.scheduled_date,
            doctor: AssignedDoctorBody {
                name: booked.doctor.full_name,
                specialization: booked.doctor.specialization,
            },
        }
    }
}

/// List appointments for one patient or the most recent clinic-wide.
#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    params(AppointmentListParams),
    responses(
        (status = 200, description = "Appointments, newest first; clinic-wide items use ClinicAppointmentListItem", body = [AppointmentListItem]),
        (status = 400, description = "Invalid user_id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["appointments"],
    operation_id = "listAppointments",
    security([])
)]
pub async fn list_appointments(
    state: web::Data<HttpState>,
    params: web::Query<AppointmentListParams>,
) -> ApiResult<HttpResponse> {
    let scope = params.scope()?;
    let records = state.appointments_query.list_appointments(scope).await?;
    let response = match scope {
        AppointmentScope::ForUser(_) => {
            let body: Vec<AppointmentListItem> = records.into_iter().map(Into::into).collect();
            json_ok(&body)
        }
        AppointmentScope::Recent { .. } => {
            let body: Vec<ClinicAppointmentListItem> =
                records.into_iter().map(Into::into).collect();
            json_ok(&body)
        }
    };
    Ok(response)
}

/// Book an appointment with an automatically assigned doctor.
#[utoipa::path(
    post,
    path = "/api/v1/appointments",
    request_body = BookAppointmentRequest,
    responses(
        (status = 200, description = "Appointment booked", body = BookedAppointmentBody),
        (status = 400, description = "Missing required fields or invalid service_id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "No available doctors", body = ErrorBody)
    ),
    tags = ["appointments"],
    operation_id = "bookAppointment",
    security([])
)]
pub async fn book_appointment(
    state: web::Data<HttpState>,
    payload: web::Json<BookAppointmentRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let request = BookingRequest::try_from_parts(
        payload.user_id,
        payload.symptoms.as_deref(),
        payload.service_id,
    )
    .map_err(|err| match err {
        BookingValidationError::InvalidService => Error::invalid_request("Invalid service_id"),
        BookingValidationError::MissingUser | BookingValidationError::MissingSymptoms => {
            Error::invalid_request("Missing required fields")
        }
    })?;
    let booked = state.appointments.book(request).await?;
    Ok(json_ok(&BookedAppointmentBody::from(booked)))
}

/// CORS preflight for the appointments endpoint.
#[utoipa::path(
    options,
    path = "/api/v1/appointments",
    responses((status = 200, description = "Preflight accepted")),
    tags = ["appointments"],
    operation_id = "appointmentsPreflight",
    security([])
)]
pub async fn preflight() -> HttpResponse {
    CORS.preflight()
}

/// Resource serving `/appointments`.
pub fn resource() -> Resource {
    web::resource("/appointments")
        .route(web::get().to(list_appointments))
        .route(web::post().to(book_appointment))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}
