//! Password digests and identity tokens.
//!
//! Both formats are kept for compatibility with rows and clients that
//! already exist. Neither is a security boundary: the digest is an unsalted
//! SHA-256 and the token is an unsigned base64 string without expiry.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use super::{UserId, UserProfile};

/// Lowercase hex SHA-256 of a UTF-8 password.
///
/// # Examples
/// ```
/// use clinic_backend::domain::PasswordDigest;
///
/// let digest = PasswordDigest::of("abc");
/// assert_eq!(
///     digest.as_str(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest the given password.
    pub fn of(password: &str) -> Self {
        Self(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Hex representation as stored in `users.password_hash`.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Errors raised while decoding an identity token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityTokenError {
    /// The token was not valid base64.
    #[error("token is not valid base64")]
    Encoding,
    /// The decoded bytes were not UTF-8.
    #[error("token payload is not UTF-8")]
    Utf8,
    /// The payload did not have the `id:email` shape.
    #[error("token payload is malformed")]
    Malformed,
}

/// Opaque identifier handed to clients after register or login.
///
/// The payload is `"{user_id}:{email}"` encoded with standard base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Encode a token for the given user.
    pub fn issue(id: UserId, email: &str) -> Self {
        Self(STANDARD.encode(format!("{id}:{email}")))
    }

    /// Encode a token for an authenticated profile.
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self::issue(profile.id(), profile.email())
    }

    /// Decode a token back into its user identifier and email.
    ///
    /// The email may itself contain `:`; only the first separator splits.
    pub fn decode(token: &str) -> Result<(UserId, String), IdentityTokenError> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|_| IdentityTokenError::Encoding)?;
        let payload = String::from_utf8(bytes).map_err(|_| IdentityTokenError::Utf8)?;
        let (id, email) = payload
            .split_once(':')
            .ok_or(IdentityTokenError::Malformed)?;
        let id = id
            .parse::<i32>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or(IdentityTokenError::Malformed)?;
        Ok((id, email.to_owned()))
    }

    /// Encoded string as sent over the wire.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the token, returning the encoded string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
