//! Error types for authentication, token handling and input validation
//!
//! The messages are the client-facing detail; the HTTP layer pairs each
//! variant with a status code and an error category.

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token, or no identity attached to the request
    #[error("Access token required")]
    Unauthenticated,

    /// The identity is known but not allowed to perform the operation
    #[error("{reason}")]
    Forbidden { reason: String },

    /// Unknown email or wrong password. Both cases share one message.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        AuthError::Forbidden {
            reason: reason.into(),
        }
    }
}

/// Token verification failure
///
/// Callers only ever see this single variant; the concrete cause is logged
/// by the token service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Input rejected by a validation schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending field, or `body` when the payload as a whole is rejected
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
