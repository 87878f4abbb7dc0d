//! Auth service settings, read from the environment and `.env`.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_JWT_EXPIRES_IN_HOURS: i64 = 24;
pub const DEFAULT_BCRYPT_COST: u32 = 12;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

// bcrypt rejects costs outside this range
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

// Ten years
pub const MAX_JWT_EXPIRES_IN_HOURS: i64 = 10 * 365 * 24;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the auth service.
#[derive(Clone)]
pub struct AuthConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in_hours: i64,
    pub bcrypt_cost: u32,
    /// `None` runs the service against the in-memory user store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub graphql_playground: bool,
}

impl AuthConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt_expires_in_hours = parse_or(get("JWT_EXPIRES_IN_HOURS"), "JWT_EXPIRES_IN_HOURS", DEFAULT_JWT_EXPIRES_IN_HOURS)?;
        if !(1..=MAX_JWT_EXPIRES_IN_HOURS).contains(&jwt_expires_in_hours) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRES_IN_HOURS",
                value: jwt_expires_in_hours.to_string(),
                reason: format!("must be between 1 and {}", MAX_JWT_EXPIRES_IN_HOURS),
            });
        }

        let bcrypt_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }

        let database_url = get("DATABASE_URL");
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set; users will be kept in memory only");
        }

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            jwt_secret,
            jwt_expires_in_hours,
            bcrypt_cost,
            database_url,
            db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            graphql_playground: parse_flag(get("GRAPHQL_PLAYGROUND"), "GRAPHQL_PLAYGROUND", true)?,
        })
    }

    /// Defaults with the given secret. Used by tests and embedding callers.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            jwt_secret: jwt_secret.into(),
            jwt_expires_in_hours: DEFAULT_JWT_EXPIRES_IN_HOURS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            graphql_playground: true,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expires_in_hours", &self.jwt_expires_in_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("db_max_connections", &self.db_max_connections)
            .field("graphql_playground", &self.graphql_playground)
            .finish()
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_flag(raw: Option<String>, key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            key,
            value: v,
            reason: "expected a boolean".to_string(),
        }),
    }
}
