//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NewUser, UserPersistenceError, UserRepository};
use crate::domain::{PasswordDigest, UserId, UserProfile};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_profile(row: UserRow) -> Result<UserProfile, UserPersistenceError> {
    let id = UserId::new(row.id).map_err(|err| UserPersistenceError::query(err.to_string()))?;
    UserProfile::try_new(id, row.email, row.full_name)
        .map_err(|err| UserPersistenceError::query(err.to_string()))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserProfile, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            email: &user.email,
            password_hash: user.password_digest.as_str(),
            full_name: &user.full_name,
            phone: &user.phone,
        };

        let inserted = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_profile(inserted)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email))
            .filter(users::password_hash.eq(digest.as_str()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_profile).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_become_profiles() {
        let profile = row_to_profile(UserRow {
            id: 3,
            email: "ada@example.com".to_owned(),
            full_name: "Ada Lovelace".to_owned(),
        })
        .expect("valid row");

        assert_eq!(profile.id().get(), 3);
        assert_eq!(profile.email(), "ada@example.com");
    }

    #[rstest]
    fn invalid_rows_surface_as_query_errors() {
        let err = row_to_profile(UserRow {
            id: 0,
            email: "ada@example.com".to_owned(),
            full_name: "Ada".to_owned(),
        })
        .expect_err("zero id is rejected");

        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
