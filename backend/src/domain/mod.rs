//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed clinic entities used by the HTTP and
//! persistence layers, plus the services that implement the driving ports.
//! Types stay framework agnostic; wire shapes live in the inbound adapters.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Registration / LoginCredentials: validated authentication inputs.
//! - PasswordDigest / IdentityToken: compatibility credential formats.
//! - Doctor, FaqEntry, ClinicService: reference data read models.
//! - BookingRequest, AppointmentRecord, BookedAppointment: appointments.
//! - DoctorPicker: strategy used to assign doctors to new appointments.

pub mod appointment;
pub mod appointment_service;
pub mod auth;
pub mod auth_service;
pub mod clinic_service;
pub mod doctor;
pub mod doctor_assignment;
pub mod error;
pub mod faq;
pub mod identity;
pub mod ports;
pub mod reference_data_service;
pub mod trace_id;
pub mod user;

pub use self::appointment::{
    AppointmentDraft, AppointmentId, AppointmentRecord, AppointmentScope, AppointmentStatus,
    BookedAppointment, BookingRequest, BookingValidationError, ListedStatus,
    RECENT_APPOINTMENTS_LIMIT, ServiceId, UnknownAppointmentStatus, booking_lead_time,
};
pub use self::appointment_service::{AppointmentService, NO_AVAILABLE_DOCTORS_MESSAGE};
pub use self::auth::{
    LoginCredentials, LoginValidationError, Registration, RegistrationValidationError,
};
pub use self::auth_service::{AuthenticationService, INVALID_CREDENTIALS_MESSAGE};
pub use self::clinic_service::ClinicService;
pub use self::doctor::{AvailableDoctor, Doctor, DoctorId};
pub use self::doctor_assignment::{DoctorPicker, FirstDoctorPicker, UniformDoctorPicker};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::faq::FaqEntry;
pub use self::identity::{IdentityToken, IdentityTokenError, PasswordDigest};
pub use self::reference_data_service::{
    DoctorDirectoryService, FaqService, ServiceCatalogueService,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserProfile, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use clinic_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("Missing required fields"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
