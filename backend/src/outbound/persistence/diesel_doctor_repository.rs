//! PostgreSQL-backed `DoctorRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DoctorRepository, DoctorRepositoryError};
use crate::domain::{Doctor, DoctorId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::DoctorRow;
use super::pool::DbPool;
use super::schema::doctors;

/// Diesel-backed doctor directory.
#[derive(Clone)]
pub struct DieselDoctorRepository {
    pool: DbPool,
}

impl DieselDoctorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: DoctorId::new(row.id),
            full_name: row.full_name,
            specialization: row.specialization,
            experience_years: row.experience_years,
            photo_url: row.photo_url,
            description: row.description,
            available: row.available,
        }
    }
}

#[async_trait]
impl DoctorRepository for DieselDoctorRepository {
    async fn list_available(&self) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, DoctorRepositoryError::connection))?;

        let rows: Vec<DoctorRow> = doctors::table
            .filter(doctors::available.eq(true))
            .order((doctors::full_name.asc(), doctors::id.asc()))
            .select(DoctorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    DoctorRepositoryError::query,
                    DoctorRepositoryError::connection,
                )
            })?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }
}
