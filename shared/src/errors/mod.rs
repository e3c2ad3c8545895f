//! Shared error response structure and error codes

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint: `{"error": ..., "message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable category, one of [`error_codes`]
    pub error: String,

    /// Human-readable detail
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Error categories used in the `error` field
pub mod error_codes {
    pub const UNAUTHENTICATED: &str = "unauthenticated";
    pub const INVALID_TOKEN: &str = "invalid_token";
    pub const FORBIDDEN: &str = "forbidden";
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const CONFLICT: &str = "conflict";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const ROUTE_NOT_FOUND: &str = "route_not_found";
}
