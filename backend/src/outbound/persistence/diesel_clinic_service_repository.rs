//! PostgreSQL-backed service catalogue.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ClinicServiceRepository, ClinicServiceRepositoryError};
use crate::domain::{ClinicService, ServiceId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ServiceRow;
use super::pool::DbPool;
use super::schema::services;

#[derive(Clone)]
pub struct DieselClinicServiceRepository {
    pool: DbPool,
}

impl DieselClinicServiceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClinicServiceRepository for DieselClinicServiceRepository {
    async fn list_all(&self) -> Result<Vec<ClinicService>, ClinicServiceRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ClinicServiceRepositoryError::connection))?;

        let rows: Vec<ServiceRow> = services::table
            .order(services::id.asc())
            .select(ServiceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    ClinicServiceRepositoryError::query,
                    ClinicServiceRepositoryError::connection,
                )
            })?;

        Ok(rows
            .into_iter()
            .map(|row| ClinicService {
                id: ServiceId::new(row.id),
                title: row.title,
                description: row.description,
                price: row.price,
                duration_minutes: row.duration_minutes,
            })
            .collect())
    }
}
