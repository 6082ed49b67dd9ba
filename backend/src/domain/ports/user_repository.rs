//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{PasswordDigest, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
    reported_as internal;
}

/// Row to insert when a patient registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_digest: PasswordDigest,
    pub full_name: String,
    pub phone: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored profile.
    ///
    /// A duplicate email surfaces as [`UserPersistenceError::Query`].
    async fn create(&self, user: &NewUser) -> Result<UserProfile, UserPersistenceError>;

    /// Fetch the user whose email and password digest both match.
    async fn find_by_credentials(
        &self,
        email: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserPersistenceError>;
}
