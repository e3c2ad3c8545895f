//! One-way password digests backed by bcrypt.
//!
//! Hashing and verification are CPU bound and run on tokio's blocking pool.

use ha_shared::config::DEFAULT_BCRYPT_COST;

use crate::errors::{DomainError, DomainResult, ValidationError};

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// bcrypt only reads this many bytes of a secret and ignores the rest
pub const MAX_SECRET_BYTES: usize = 72;

/// Credential hasher with a fixed bcrypt work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    /// Clamps `cost` into the range bcrypt accepts
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a salted digest of `secret`.
    ///
    /// Secrets longer than [`MAX_SECRET_BYTES`] are rejected instead of
    /// being truncated.
    pub async fn hash(&self, secret: &str) -> DomainResult<String> {
        if secret.len() > MAX_SECRET_BYTES {
            return Err(ValidationError::new("password", "Password must be at most 72 bytes").into());
        }

        let secret = secret.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }

    /// Check `secret` against a stored digest.
    ///
    /// A malformed digest is a mismatch, never an error. So is a secret
    /// too long to have been hashed.
    pub async fn verify(&self, secret: &str, digest: &str) -> bool {
        if secret.len() > MAX_SECRET_BYTES {
            return false;
        }

        let secret = secret.to_owned();
        let digest = digest.to_owned();

        match tokio::task::spawn_blocking(move || bcrypt::verify(secret, &digest)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Stored password digest could not be parsed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
