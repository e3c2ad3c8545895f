//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use ha_shared::config::JwtConfig;

use crate::domain::entities::identity::IdentityClaims;
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::claims::{Claims, InvalidTokenReason};

/// Issues and verifies HS256 identity tokens
///
/// Built once at startup from [`JwtConfig`] and shared behind an `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// An error if the signing secret is empty or the validity window is
    /// not a positive, representable number of days
    pub fn new(config: &JwtConfig) -> DomainResult<Self> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::internal("token signing secret must not be empty"));
        }

        let validity = Duration::try_days(config.validity_days)
            .filter(|validity| *validity > Duration::zero())
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "token validity of {} days is out of range",
                    config.validity_days
                ))
            })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            validity,
        })
    }

    /// Mints a token for `claims`, valid from now
    pub fn issue(&self, claims: &IdentityClaims) -> DomainResult<String> {
        self.issue_at(claims, Utc::now())
    }

    /// Mints a token as if issued at `issued_at`
    pub fn issue_at(&self, claims: &IdentityClaims, issued_at: DateTime<Utc>) -> DomainResult<String> {
        let expires_at = issued_at
            .checked_add_signed(self.validity)
            .ok_or_else(|| DomainError::internal("token expiry overflows"))?;

        let payload = Claims {
            sub: claims.user_id.to_string(),
            email: claims.email.clone(),
            role: claims.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("token signing failed: {}", e)))
    }

    /// Validates a token and returns the identity it asserts
    ///
    /// Every failure collapses into [`TokenError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        self.decode_claims(token).map_err(|reason| {
            tracing::debug!(?reason, "Rejected bearer token");
            TokenError::InvalidToken
        })
    }

    pub(crate) fn decode_claims(&self, token: &str) -> Result<IdentityClaims, InvalidTokenReason> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| InvalidTokenReason::BadSubject)?;
        let role: Role = claims
            .role
            .parse()
            .map_err(|_| InvalidTokenReason::UnknownRole)?;

        Ok(IdentityClaims {
            user_id,
            email: claims.email,
            role,
        })
    }
}
