//! Driving port for registration and login use-cases.
//!
//! Inbound adapters call this port to authenticate patients without knowing
//! the backing persistence, which keeps HTTP handler tests deterministic.

use async_trait::async_trait;

use crate::domain::{Error, IdentityToken, LoginCredentials, Registration, UserProfile};

/// Token and profile returned after a successful register or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: IdentityToken,
    pub user: UserProfile,
}

impl AuthSession {
    /// Issue a token for `user`.
    pub fn for_user(user: UserProfile) -> Self {
        Self {
            token: IdentityToken::for_profile(&user),
            user,
        }
    }
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthCommand: Send + Sync {
    /// Create a patient account and sign it in.
    async fn register(&self, registration: &Registration) -> Result<AuthSession, Error>;

    /// Validate credentials and return the matching account.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, Error>;
}
