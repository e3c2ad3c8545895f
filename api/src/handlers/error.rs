//! Conversion of domain failures into HTTP responses.
//!
//! This is the only place where a `DomainError` becomes a status code and an
//! `{"error", "message"}` body. Storage and integrity failures are logged
//! here and reach the client only as a generic internal error.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use ha_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use ha_shared::errors::{error_codes, ErrorResponse};

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// A domain failure on its way out of a handler or middleware
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    /// Status, error category and client-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match &self.0 {
            DomainError::Auth(AuthError::Unauthenticated) => (
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHENTICATED,
                self.0.to_string(),
            ),
            DomainError::Auth(AuthError::Forbidden { reason }) => {
                (StatusCode::FORBIDDEN, error_codes::FORBIDDEN, reason.clone())
            }
            DomainError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                self.0.to_string(),
            ),
            DomainError::Token(TokenError::InvalidToken) => (
                StatusCode::FORBIDDEN,
                error_codes::INVALID_TOKEN,
                self.0.to_string(),
            ),
            DomainError::ValidationErr(e) => (
                StatusCode::BAD_REQUEST,
                error_codes::VALIDATION_ERROR,
                e.message.clone(),
            ),
            DomainError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, self.0.to_string())
            }
            DomainError::Conflict { message } => {
                (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone())
            }
            DomainError::DataIntegrity { .. } | DomainError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE.to_string(),
            ),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed with internal error");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse::new(code, message))
    }
}

/// Body for unmatched routes
pub fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::ROUTE_NOT_FOUND,
        "The requested route does not exist",
    ))
}
