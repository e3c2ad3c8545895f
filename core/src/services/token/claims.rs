//! Wire format of the signed token payload.

use serde::{Deserialize, Serialize};

/// JWT payload
///
/// `role` is carried as a plain string so that an unknown value decodes and
/// can then be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Why a token was rejected. Only ever logged; callers see `TokenError::InvalidToken`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Malformed,
    BadSignature,
    Expired,
    MissingClaim,
    UnknownRole,
    BadSubject,
    Other,
}

impl From<jsonwebtoken::errors::Error> for InvalidTokenReason {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => InvalidTokenReason::BadSignature,
            ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
            ErrorKind::MissingRequiredClaim(_) => InvalidTokenReason::MissingClaim,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => InvalidTokenReason::Malformed,
            _ => InvalidTokenReason::Other,
        }
    }
}
