//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError, Lookup};

/// bcrypt work factor used when `BCRYPT_COST` is not set
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Lifetime of an issued token
pub const DEFAULT_TOKEN_VALIDITY_DAYS: i64 = 7;

/// Accepted range for `JWT_EXPIRY_DAYS`
const TOKEN_VALIDITY_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=3650;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token validity in days, counted from issuance
    #[serde(default = "default_validity_days")]
    pub validity_days: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and the default validity
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            validity_days: DEFAULT_TOKEN_VALIDITY_DAYS,
        }
    }

    /// Read `JWT_SECRET` and `JWT_EXPIRY_DAYS`. A missing or blank secret is fatal.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let validity_days = parse_or(lookup, "JWT_EXPIRY_DAYS", DEFAULT_TOKEN_VALIDITY_DAYS)?;
        if !TOKEN_VALIDITY_DAYS_RANGE.contains(&validity_days) {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRY_DAYS".to_string(),
                value: validity_days.to_string(),
            });
        }

        Ok(Self {
            secret,
            validity_days,
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for new password digests
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_lookup(lookup)?,
            bcrypt_cost: parse_or(lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
        })
    }
}

fn default_validity_days() -> i64 {
    DEFAULT_TOKEN_VALIDITY_DAYS
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_days_override() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("abc".to_string()),
            "JWT_EXPIRY_DAYS" => Some("2".to_string()),
            _ => None,
        };
        assert_eq!(JwtConfig::from_lookup(&lookup).unwrap().validity_days, 2);
    }

    #[test]
    fn test_expiry_days_out_of_range_is_rejected() {
        for raw in ["0", "-1", "3651", "1000000000000000"] {
            let lookup = |key: &str| match key {
                "JWT_SECRET" => Some("abc".to_string()),
                "JWT_EXPIRY_DAYS" => Some(raw.to_string()),
                _ => None,
            };
            assert_eq!(
                JwtConfig::from_lookup(&lookup).unwrap_err(),
                ConfigError::InvalidValue {
                    key: "JWT_EXPIRY_DAYS".to_string(),
                    value: raw.to_string(),
                },
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_blank_secret_is_rejected() {
        let lookup = |key: &str| (key == "JWT_SECRET").then(|| "   ".to_string());
        assert_eq!(
            AuthConfig::from_lookup(&lookup).unwrap_err(),
            ConfigError::MissingJwtSecret
        );
    }

    #[test]
    fn test_defaults_applied() {
        let lookup = |key: &str| (key == "JWT_SECRET").then(|| "abc".to_string());
        let config = AuthConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.jwt.validity_days, DEFAULT_TOKEN_VALIDITY_DAYS);
    }

    #[test]
    fn test_secret_not_serialized() {
        let config = AuthConfig {
            jwt: JwtConfig::new("super-secret"),
            bcrypt_cost: 4,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
