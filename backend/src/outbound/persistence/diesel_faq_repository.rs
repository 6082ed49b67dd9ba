//! PostgreSQL-backed `FaqRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::FaqEntry;
use crate::domain::ports::{FaqRepository, FaqRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::FaqRow;
use super::pool::DbPool;
use super::schema::faq;

#[derive(Clone)]
pub struct DieselFaqRepository {
    pool: DbPool,
}

impl DieselFaqRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for DieselFaqRepository {
    async fn list_all(&self) -> Result<Vec<FaqEntry>, FaqRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, FaqRepositoryError::connection))?;

        let rows: Vec<FaqRow> = faq::table
            .order((faq::category.asc(), faq::id.asc()))
            .select(FaqRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(err, FaqRepositoryError::query, FaqRepositoryError::connection)
            })?;

        Ok(rows
            .into_iter()
            .map(|row| FaqEntry {
                id: row.id,
                question: row.question,
                answer: row.answer,
                category: row.category,
            })
            .collect())
    }
}
