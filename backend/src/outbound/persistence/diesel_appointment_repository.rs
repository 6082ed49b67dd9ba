//! PostgreSQL-backed `AppointmentRepository` implementation.
//!
//! Listings left-join doctors, services and (clinic-wide only) users so that
//! appointments survive deleted reference rows. Booking reads the available
//! doctors and inserts the appointment on one pooled connection without a
//! lock, so two concurrent bookings may land on the same doctor.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};
use crate::domain::{
    AppointmentDraft, AppointmentId, AppointmentRecord, AppointmentScope, AppointmentStatus,
    AvailableDoctor, BookedAppointment, DoctorId, DoctorPicker, ListedStatus,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{
    AppointmentRow, AvailableDoctorRow, ClinicAppointmentRow, InsertedAppointmentRow,
    NewAppointmentRow, PatientAppointmentRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{appointments, doctors, services, users};

/// Diesel-backed appointment store.
#[derive(Clone)]
pub struct DieselAppointmentRepository {
    pool: DbPool,
}

impl DieselAppointmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AppointmentRepositoryError {
    map_basic_pool_error(error, AppointmentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AppointmentRepositoryError {
    map_basic_diesel_error(
        error,
        AppointmentRepositoryError::query,
        AppointmentRepositoryError::connection,
    )
}

/// The inserted row must echo a status this service writes.
fn parse_status(raw: &str) -> Result<AppointmentStatus, AppointmentRepositoryError> {
    raw.parse::<AppointmentStatus>()
        .map_err(|err| AppointmentRepositoryError::query(err.to_string()))
}

struct JoinedNames {
    patient_name: Option<String>,
    doctor_name: Option<String>,
    specialization: Option<String>,
    service_name: Option<String>,
}

fn to_record(row: AppointmentRow, names: JoinedNames) -> AppointmentRecord {
    AppointmentRecord {
        id: AppointmentId::new(row.id),
        status: ListedStatus::from_stored(row.status),
        symptoms: row.symptoms,
        scheduled_date: row.scheduled_date,
        created_at: row.created_at,
        patient_name: names.patient_name,
        doctor_name: names.doctor_name,
        specialization: names.specialization,
        service_name: names.service_name,
    }
}

fn patient_row_to_record(
    (row, doctor_name, specialization, service_name): PatientAppointmentRow,
) -> AppointmentRecord {
    to_record(
        row,
        JoinedNames {
            patient_name: None,
            doctor_name,
            specialization,
            service_name,
        },
    )
}

fn clinic_row_to_record(
    (row, patient_name, doctor_name, specialization, service_name): ClinicAppointmentRow,
) -> AppointmentRecord {
    to_record(
        row,
        JoinedNames {
            patient_name,
            doctor_name,
            specialization,
            service_name,
        },
    )
}

#[async_trait]
impl AppointmentRepository for DieselAppointmentRepository {
    async fn list(
        &self,
        scope: AppointmentScope,
    ) -> Result<Vec<AppointmentRecord>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        match scope {
            AppointmentScope::ForUser(user_id) => {
                let rows: Vec<PatientAppointmentRow> = appointments::table
                    .left_join(doctors::table)
                    .left_join(services::table)
                    .filter(appointments::user_id.eq(user_id.get()))
                    .order((appointments::created_at.desc(), appointments::id.desc()))
                    .select((
                        AppointmentRow::as_select(),
                        doctors::full_name.nullable(),
                        doctors::specialization.nullable(),
                        services::title.nullable(),
                    ))
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(rows.into_iter().map(patient_row_to_record).collect())
            }
            AppointmentScope::Recent { limit } => {
                let rows: Vec<ClinicAppointmentRow> = appointments::table
                    .left_join(users::table)
                    .left_join(doctors::table)
                    .left_join(services::table)
                    .order((appointments::created_at.desc(), appointments::id.desc()))
                    .limit(limit)
                    .select((
                        AppointmentRow::as_select(),
                        users::full_name.nullable(),
                        doctors::full_name.nullable(),
                        doctors::specialization.nullable(),
                        services::title.nullable(),
                    ))
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(rows.into_iter().map(clinic_row_to_record).collect())
            }
        }
    }

    async fn book(
        &self,
        draft: AppointmentDraft,
        picker: &dyn DoctorPicker,
    ) -> Result<Option<BookedAppointment>, AppointmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let candidates: Vec<AvailableDoctor> = doctors::table
            .filter(doctors::available.eq(true))
            .order(doctors::id.asc())
            .select(AvailableDoctorRow::as_select())
            .load::<AvailableDoctorRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .map(|row| AvailableDoctor {
                id: DoctorId::new(row.id),
                full_name: row.full_name,
                specialization: row.specialization,
            })
            .collect();

        let Some(doctor) = picker.pick(&candidates).cloned() else {
            debug!("no available doctor to assign");
            return Ok(None);
        };

        let row = NewAppointmentRow {
            user_id: draft.user_id.get(),
            doctor_id: Some(doctor.id.get()),
            service_id: draft.service_id.map(|id| id.get()),
            symptoms: &draft.symptoms,
            status: draft.status.as_str(),
            scheduled_date: draft.scheduled_date,
        };

        let inserted = diesel::insert_into(appointments::table)
            .values(&row)
            .returning(InsertedAppointmentRow::as_returning())
            .get_result::<InsertedAppointmentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(BookedAppointment {
            id: AppointmentId::new(inserted.id),
            status: parse_status(&inserted.status)?,
            symptoms: inserted.symptoms,
            scheduled_date: inserted.scheduled_date,
            doctor,
        }))
    }
}
