//! Throwaway clinic databases and row seeding for the Diesel adapter suites.
//!
//! Each [`ClinicDatabase`] owns its own embedded cluster and a temporary
//! database holding the clinic tables. Rows are seeded with `postgres` so
//! tests control values the adapters never write, such as `created_at`.
#![allow(dead_code, reason = "each suite seeds only the tables it reads")]

use chrono::{DateTime, Duration, Utc};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use postgres::{Client, NoTls};
use uuid::Uuid;

use crate::pg_embed::test_cluster;

const CLINIC_SCHEMA: &str = include_str!("../fixtures/clinic_schema.sql");

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when the environment allows it, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Render a `postgres` error with its SQLSTATE and detail.
///
/// `Display` alone collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Appointment row written directly, bypassing the booking flow.
pub struct SeedAppointment<'a> {
    pub user_id: i32,
    pub doctor_id: Option<i32>,
    pub service_id: Option<i32>,
    pub symptoms: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> SeedAppointment<'a> {
    /// Confirmed appointment with no doctor or service attached.
    pub fn bare(user_id: i32, symptoms: &'a str, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            doctor_id: None,
            service_id: None,
            symptoms,
            status: "confirmed",
            created_at,
        }
    }
}

/// Temporary database with the clinic schema applied.
///
/// Field order matters: the seeding connection closes before the database is
/// dropped, and the database before its cluster.
pub struct ClinicDatabase {
    client: Client,
    url: String,
    _database: TemporaryDatabase,
    _cluster: TestCluster,
}

impl ClinicDatabase {
    pub fn provision(prefix: &str) -> Result<Self, String> {
        let cluster = test_cluster()?;
        let name = format!("{prefix}_{}", Uuid::new_v4().simple());
        let database = cluster
            .temporary_database(name.as_str())
            .map_err(|err| format!("{err:?}"))?;
        let url = database.url().to_owned();
        let mut client =
            Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))?;
        client
            .batch_execute(CLINIC_SCHEMA)
            .map_err(|err| format_postgres_error(&err))?;
        Ok(Self {
            client,
            url,
            _database: database,
            _cluster: cluster,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn insert_returning_id(
        &mut self,
        sql: &str,
        params: &[&(dyn postgres::types::ToSql + Sync)],
    ) -> Result<i32, String> {
        let row = self
            .client
            .query_one(sql, params)
            .map_err(|err| format_postgres_error(&err))?;
        row.try_get(0).map_err(|err| format_postgres_error(&err))
    }

    pub fn seed_user(&mut self, email: &str, full_name: &str) -> Result<i32, String> {
        self.insert_returning_id(
            "INSERT INTO users (email, password_hash, full_name) VALUES ($1, $2, $3) RETURNING id",
            &[&email, &"0".repeat(64), &full_name],
        )
    }

    pub fn seed_doctor(
        &mut self,
        full_name: &str,
        specialization: &str,
        available: bool,
    ) -> Result<i32, String> {
        self.insert_returning_id(
            "INSERT INTO doctors (full_name, specialization, experience_years, available) \
             VALUES ($1, $2, 7, $3) RETURNING id",
            &[&full_name, &specialization, &available],
        )
    }

    pub fn seed_service(
        &mut self,
        title: &str,
        price: Option<&str>,
        duration_minutes: Option<i32>,
    ) -> Result<i32, String> {
        self.insert_returning_id(
            "INSERT INTO services (title, price, duration_minutes) VALUES ($1, $2, $3) RETURNING id",
            &[&title, &price, &duration_minutes],
        )
    }

    pub fn seed_faq(&mut self, category: &str, question: &str) -> Result<i32, String> {
        let answer = format!("Answer to {question}");
        self.insert_returning_id(
            "INSERT INTO faq (question, answer, category) VALUES ($1, $2, $3) RETURNING id",
            &[&question, &answer, &category],
        )
    }

    /// Insert an appointment scheduled one day after `created_at`.
    pub fn seed_appointment(&mut self, seed: &SeedAppointment<'_>) -> Result<i32, String> {
        let scheduled_date = seed.created_at + Duration::hours(24);
        self.insert_returning_id(
            "INSERT INTO appointments \
             (user_id, doctor_id, service_id, symptoms, status, scheduled_date, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
            &[
                &seed.user_id,
                &seed.doctor_id,
                &seed.service_id,
                &seed.symptoms,
                &seed.status,
                &scheduled_date,
                &seed.created_at,
            ],
        )
    }

    /// Row count of a clinic table.
    pub fn count(&mut self, table: &str) -> Result<i64, String> {
        let row = self
            .client
            .query_one(format!("SELECT COUNT(*) FROM {table}").as_str(), &[])
            .map_err(|err| format_postgres_error(&err))?;
        row.try_get(0).map_err(|err| format_postgres_error(&err))
    }

    /// Stored `phone` of one user.
    pub fn phone_of(&mut self, user_id: i32) -> Result<String, String> {
        let row = self
            .client
            .query_one("SELECT phone FROM users WHERE id = $1", &[&user_id])
            .map_err(|err| format_postgres_error(&err))?;
        row.try_get(0).map_err(|err| format_postgres_error(&err))
    }
}
