//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//!
//! Every loader has a `from_env` entry point and a `from_lookup` variant that
//! takes an explicit variable source, so tests never touch process state.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_VALIDITY_DAYS};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while loading configuration at startup.
///
/// These are fatal: the process must not start serving requests with an
/// incomplete configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a token signing secret")]
    MissingJwtSecret,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Source of configuration variables, usually the process environment
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Reads the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses an optional variable, falling back to `default` when it is unset
pub(crate) fn parse_or<T: std::str::FromStr>(
    lookup: Lookup<'_>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Insert the demo organizer, participants and activities on startup
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    /// Load configuration from an explicit variable source
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_lookup(lookup),
            server: ServerConfig::from_lookup(lookup)?,
            database: DatabaseConfig::from_lookup(lookup)?,
            auth: AuthConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup),
            seed_demo_data: parse_or(lookup, "SEED_DEMO_DATA", false)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let lookup = lookup_from(&[("SERVER_PORT", "4000")]);
        let result = AppConfig::from_lookup(&lookup);
        assert_eq!(result.unwrap_err(), ConfigError::MissingJwtSecret);
    }

    #[test]
    fn test_full_config_from_lookup() {
        let lookup = lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("ENVIRONMENT", "production"),
            ("SERVER_PORT", "4000"),
            ("SEED_DEMO_DATA", "true"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]);
        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.server.port, 4000);
        assert!(config.seed_demo_data);
        assert_eq!(config.auth.jwt.secret, "s3cret");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let lookup = lookup_from(&[("JWT_SECRET", "x"), ("SERVER_PORT", "eighty")]);
        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SERVER_PORT".to_string(),
                value: "eighty".to_string(),
            }
        );
    }
}
