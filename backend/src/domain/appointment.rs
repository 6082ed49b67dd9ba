//! Appointment aggregates: booking requests, stored records and listings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use super::{AvailableDoctor, DoctorId, UserId};

/// Maximum number of rows returned by the clinic-wide listing.
pub const RECENT_APPOINTMENTS_LIMIT: i64 = 50;

/// Delay between booking and the scheduled visit.
pub fn booking_lead_time() -> Duration {
    Duration::hours(24)
}

/// Database identifier of an appointment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentId(i32);

impl AppointmentId {
    /// Wrap a raw identifier loaded from storage.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

/// Identifier of an entry in the service catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(i32);

impl ServiceId {
    /// Wrap a raw identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

/// Lifecycle state stored in `appointments.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Storage and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appointment status: {0}")]
pub struct UnknownAppointmentStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownAppointmentStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownAppointmentStatus(other.to_owned())),
        }
    }
}

/// Status as read back for a listing.
///
/// Rows written by other tools may hold values the booking flow never
/// produces; those are shown verbatim instead of failing the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedStatus {
    Known(AppointmentStatus),
    Unrecognised(String),
}

impl ListedStatus {
    /// Classify a raw `appointments.status` value.
    pub fn from_stored(raw: String) -> Self {
        raw.parse::<AppointmentStatus>()
            .map_or(Self::Unrecognised(raw), Self::Known)
    }

    /// Wire representation, identical to the stored value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognised(raw) => raw.as_str(),
        }
    }
}

impl From<AppointmentStatus> for ListedStatus {
    fn from(status: AppointmentStatus) -> Self {
        Self::Known(status)
    }
}

/// Validation errors raised while building a [`BookingRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    /// `user_id` was absent or not a positive integer.
    #[error("user_id is required")]
    MissingUser,
    /// `symptoms` was absent or blank.
    #[error("symptoms are required")]
    MissingSymptoms,
    /// `service_id` was present but not a positive 32-bit integer.
    #[error("service_id is not a valid identifier")]
    InvalidService,
}

/// Validated request to book an appointment.
///
/// # Examples
/// ```
/// use clinic_backend::domain::BookingRequest;
///
/// let request = BookingRequest::try_from_parts(Some(3), Some("cough"), None)
///     .expect("valid booking");
/// assert_eq!(request.user_id().get(), 3);
/// assert!(BookingRequest::try_from_parts(Some(0), Some("cough"), None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    user_id: UserId,
    symptoms: String,
    service_id: Option<ServiceId>,
}

impl BookingRequest {
    /// Validate raw inputs. Symptoms are stored as given once known non-blank.
    pub fn try_from_parts(
        user_id: Option<i64>,
        symptoms: Option<&str>,
        service_id: Option<i64>,
    ) -> Result<Self, BookingValidationError> {
        let user_id = user_id
            .and_then(|raw| i32::try_from(raw).ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or(BookingValidationError::MissingUser)?;
        let symptoms = symptoms
            .filter(|value| !value.trim().is_empty())
            .ok_or(BookingValidationError::MissingSymptoms)?;
        let service_id = service_id
            .map(|raw| {
                i32::try_from(raw)
                    .ok()
                    .filter(|id| *id > 0)
                    .map(ServiceId::new)
                    .ok_or(BookingValidationError::InvalidService)
            })
            .transpose()?;

        Ok(Self {
            user_id,
            symptoms: symptoms.to_owned(),
            service_id,
        })
    }

    /// Patient booking the visit.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Free-text description of the complaint.
    pub fn symptoms(&self) -> &str {
        self.symptoms.as_str()
    }

    /// Optional catalogue entry the patient selected.
    pub fn service_id(&self) -> Option<ServiceId> {
        self.service_id
    }

    /// Build the draft to persist, scheduling it one lead time after `now`.
    pub fn into_draft(self, now: DateTime<Utc>) -> AppointmentDraft {
        AppointmentDraft {
            user_id: self.user_id,
            service_id: self.service_id,
            symptoms: self.symptoms,
            status: AppointmentStatus::Confirmed,
            scheduled_date: now + booking_lead_time(),
        }
    }
}

/// Appointment ready to insert once a doctor is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub user_id: UserId,
    pub service_id: Option<ServiceId>,
    pub symptoms: String,
    pub status: AppointmentStatus,
    pub scheduled_date: DateTime<Utc>,
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedAppointment {
    pub id: AppointmentId,
    pub symptoms: String,
    pub status: AppointmentStatus,
    pub scheduled_date: DateTime<Utc>,
    pub doctor: AvailableDoctor,
}

impl BookedAppointment {
    /// Identifier of the assigned doctor.
    pub fn doctor_id(&self) -> DoctorId {
        self.doctor.id
    }
}

/// Which appointments a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentScope {
    /// Every appointment of one patient, unbounded.
    ForUser(UserId),
    /// The most recent appointments across all patients.
    Recent { limit: i64 },
}

impl AppointmentScope {
    /// Clinic-wide listing capped at [`RECENT_APPOINTMENTS_LIMIT`].
    pub fn recent() -> Self {
        Self::Recent {
            limit: RECENT_APPOINTMENTS_LIMIT,
        }
    }

    /// Build the scope from an optional patient filter.
    pub fn from_user(user_id: Option<UserId>) -> Self {
        user_id.map_or_else(Self::recent, Self::ForUser)
    }
}

/// One row of an appointment listing, newest first.
///
/// `patient_name` is populated only for clinic-wide listings. Doctor and
/// service columns come from left joins and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    pub id: AppointmentId,
    pub symptoms: String,
    pub status: ListedStatus,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub specialization: Option<String>,
    pub service_name: Option<String>,
}
