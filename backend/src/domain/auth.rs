//! Authentication primitives: registration details and login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when registration payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was missing or empty.
    EmptyPassword,
    /// Full name was missing or blank once trimmed.
    EmptyFullName,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyFullName => write!(f, "full name must not be empty"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was missing or empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

fn required_trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn required_password(value: Option<&str>) -> Option<Zeroizing<String>> {
    value
        .filter(|value| !value.is_empty())
        .map(|value| Zeroizing::new(value.to_owned()))
}

/// Validated details for a new patient account.
///
/// ## Invariants
/// - `email` and `full_name` are trimmed and non-empty.
/// - `password` is non-empty; caller-provided whitespace is retained so the
///   stored digest matches what the user typed.
/// - `phone` defaults to an empty string when absent.
///
/// # Examples
/// ```
/// use clinic_backend::domain::Registration;
///
/// let reg = Registration::try_from_parts(
///     Some(" ada@example.com "),
///     Some("secret"),
///     Some("Ada Lovelace"),
///     None,
/// )
/// .expect("valid registration");
/// assert_eq!(reg.email(), "ada@example.com");
/// assert_eq!(reg.phone(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: String,
    password: Zeroizing<String>,
    full_name: String,
    phone: String,
}

impl Registration {
    /// Construct registration details from optional raw inputs.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
        full_name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Self, RegistrationValidationError> {
        let email = required_trimmed(email).ok_or(RegistrationValidationError::EmptyEmail)?;
        let password =
            required_password(password).ok_or(RegistrationValidationError::EmptyPassword)?;
        let full_name =
            required_trimmed(full_name).ok_or(RegistrationValidationError::EmptyFullName)?;

        Ok(Self {
            email: email.to_owned(),
            password,
            full_name: full_name.to_owned(),
            phone: phone.map(str::trim).unwrap_or_default().to_owned(),
        })
    }

    /// Email address used as the login name.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Display name.
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Contact phone, possibly empty.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use clinic_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(Some("ada@example.com"), Some("secret"))
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from optional raw email/password inputs.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        let email = required_trimmed(email).ok_or(LoginValidationError::EmptyEmail)?;
        let password = required_password(password).ok_or(LoginValidationError::EmptyPassword)?;

        Ok(Self {
            email: email.to_owned(),
            password,
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
