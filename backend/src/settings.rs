//! Environment-driven start-up configuration.
//!
//! Values are read once through [`mockable::Env`] so parsing can be tested
//! with `MockEnv` instead of mutating the process environment.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use mockable::Env;

use crate::outbound::persistence::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, PoolConfig};

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const BIND_ADDR_ENV: &str = "CLINIC_BIND_ADDR";
const POOL_MAX_SIZE_ENV: &str = "CLINIC_DB_POOL_MAX_SIZE";
const POOL_TIMEOUT_ENV: &str = "CLINIC_DB_POOL_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_max_size: u32,
    pub pool_timeout: Duration,
}

impl AppSettings {
    /// Read settings from `env`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clinic_backend::settings::AppSettings;
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "DATABASE_URL" => Some("postgres://localhost/clinic".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 8080);
    /// ```
    ///
    /// # Errors
    ///
    /// [`SettingsError::MissingEnv`] when `DATABASE_URL` is absent or blank,
    /// [`SettingsError::InvalidEnv`] when an optional value does not parse.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let database_url = env
            .string(DATABASE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(SettingsError::MissingEnv {
                name: DATABASE_URL_ENV,
            })?;

        let bind_addr = parse_or(env, BIND_ADDR_ENV, "host:port", || DEFAULT_BIND_ADDR)?;
        let pool_max_size = parse_or(env, POOL_MAX_SIZE_ENV, "a positive integer", || {
            DEFAULT_MAX_SIZE
        })?;
        if pool_max_size == 0 {
            return Err(SettingsError::InvalidEnv {
                name: POOL_MAX_SIZE_ENV,
                value: "0".to_owned(),
                expected: "a positive integer",
            });
        }
        let timeout_secs: u64 = parse_or(env, POOL_TIMEOUT_ENV, "seconds as an integer", || {
            DEFAULT_CONNECTION_TIMEOUT.as_secs()
        })?;

        Ok(Self {
            database_url,
            bind_addr,
            pool_max_size,
            pool_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url.clone())
            .with_max_size(self.pool_max_size)
            .with_connection_timeout(self.pool_timeout)
    }
}

fn parse_or<E, T>(
    env: &E,
    name: &'static str,
    expected: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, SettingsError>
where
    E: Env,
    T: std::str::FromStr,
{
    match env.string(name) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidEnv {
                    name,
                    value,
                    expected,
                })
        }
        _ => Ok(default()),
    }
}
