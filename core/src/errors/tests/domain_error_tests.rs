//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_invalid_credentials_message_is_generic() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Invalid email or password"
    );
}

#[test]
fn test_forbidden_carries_reason() {
    let error = AuthError::forbidden("Admin access required");
    assert_eq!(error.to_string(), "Admin access required");
}

#[test]
fn test_validation_error_displays_message_only() {
    let error = ValidationError::new("name", "Name must be at least 2 characters");
    assert_eq!(error.field, "name");
    assert_eq!(error.to_string(), "Name must be at least 2 characters");
}

#[test]
fn test_bridged_errors_are_transparent() {
    let domain: DomainError = TokenError::InvalidToken.into();
    assert_eq!(domain.to_string(), "Invalid or expired token");

    let domain: DomainError = AuthError::Unauthenticated.into();
    assert!(matches!(domain, DomainError::Auth(AuthError::Unauthenticated)));
}

#[test]
fn test_not_found_names_resource() {
    assert_eq!(DomainError::not_found("Activity").to_string(), "Activity not found");
}
