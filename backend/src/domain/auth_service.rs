//! Registration and login domain service.
//!
//! Implements [`AuthCommand`] over a [`UserRepository`]. Passwords are
//! digested here so adapters only ever see [`PasswordDigest`] values.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{AuthCommand, AuthSession, NewUser, UserRepository};
use crate::domain::{Error, LoginCredentials, PasswordDigest, Registration};

/// Message returned for unknown email/password combinations.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Authentication service implementing the driving port.
#[derive(Clone)]
pub struct AuthenticationService<R> {
    users: Arc<R>,
}

impl<R> AuthenticationService<R> {
    /// Create a new service with the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> AuthCommand for AuthenticationService<R>
where
    R: UserRepository,
{
    async fn register(&self, registration: &Registration) -> Result<AuthSession, Error> {
        let new_user = NewUser {
            email: registration.email().to_owned(),
            password_digest: PasswordDigest::of(registration.password()),
            full_name: registration.full_name().to_owned(),
            phone: registration.phone().to_owned(),
        };
        let user = self.users.create(&new_user).await?;
        info!(user_id = %user.id(), "registered user");
        Ok(AuthSession::for_user(user))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, Error> {
        let digest = PasswordDigest::of(credentials.password());
        let user = self
            .users
            .find_by_credentials(credentials.email(), &digest)
            .await?;
        match user {
            Some(user) => Ok(AuthSession::for_user(user)),
            None => {
                debug!("login rejected");
                Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
            }
        }
    }
}
