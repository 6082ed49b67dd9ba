//! Patient account data model.

use std::fmt;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier was zero or negative.
    NonPositiveId,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Full name was missing or blank once trimmed.
    EmptyFullName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "user id must be a positive integer"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyFullName => write!(f, "full name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Server-generated user identifier (a PostgreSQL `serial`).
///
/// # Examples
/// ```
/// use clinic_backend::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Raw integer value as stored in the database.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public view of a registered user returned after register or login.
///
/// ## Invariants
/// - `email` and `full_name` are non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: UserId,
    email: String,
    full_name: String,
}

impl UserProfile {
    /// Fallible constructor enforcing the profile invariants.
    pub fn try_new(
        id: UserId,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFullName);
        }
        Ok(Self {
            id,
            email,
            full_name,
        })
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Name shown to clinic staff.
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn user_id_rejects_non_positive_values(#[case] raw: i32) {
        assert_eq!(UserId::new(raw), Err(UserValidationError::NonPositiveId));
    }

    #[rstest]
    #[case("", "Ada", UserValidationError::EmptyEmail)]
    #[case("ada@example.com", "  ", UserValidationError::EmptyFullName)]
    fn profile_rejects_blank_fields(
        #[case] email: &str,
        #[case] full_name: &str,
        #[case] expected: UserValidationError,
    ) {
        let id = UserId::new(1).expect("valid id");
        let err = UserProfile::try_new(id, email, full_name).expect_err("blank fields must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn profile_exposes_fields() {
        let id = UserId::new(5).expect("valid id");
        let profile = UserProfile::try_new(id, "a@x.com", "A").expect("valid profile");
        assert_eq!(profile.id().get(), 5);
        assert_eq!(profile.email(), "a@x.com");
        assert_eq!(profile.full_name(), "A");
    }
}
