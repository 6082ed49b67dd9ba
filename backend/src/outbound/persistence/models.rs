//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{appointments, doctors, faq, services, users};

/// Public columns of a user row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DoctorRow {
    pub id: i32,
    pub full_name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub available: bool,
}

/// Columns needed to assign a doctor to a booking.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = doctors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AvailableDoctorRow {
    pub id: i32,
    pub full_name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ServiceRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = faq)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FaqRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
}

// ---------------------------------------------------------------------------
// Appointment models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub(crate) struct NewAppointmentRow<'a> {
    pub user_id: i32,
    pub doctor_id: Option<i32>,
    pub service_id: Option<i32>,
    pub symptoms: &'a str,
    pub status: &'a str,
    pub scheduled_date: DateTime<Utc>,
}

/// Columns returned by `INSERT ... RETURNING` for a booking.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct InsertedAppointmentRow {
    pub id: i32,
    pub symptoms: String,
    pub status: String,
    pub scheduled_date: DateTime<Utc>,
}

/// Appointment columns shared by both listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AppointmentRow {
    pub id: i32,
    pub symptoms: String,
    pub status: String,
    pub scheduled_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Patient listing row: appointment plus doctor name, specialization and
/// service title from left joins.
pub(crate) type PatientAppointmentRow = (
    AppointmentRow,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Clinic-wide listing row: patient name first, then as above.
pub(crate) type ClinicAppointmentRow = (
    AppointmentRow,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);
