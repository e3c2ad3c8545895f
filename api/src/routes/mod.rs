//! Route handlers grouped by resource.
//!
//! Each resource module exposes a `routes` function returning its scope with
//! the authentication and authorization gates applied per route.

pub mod activities;
pub mod auth;
pub mod cabin;
pub mod health;
pub mod notifications;
pub mod users;

use uuid::Uuid;

use ha_core::errors::DomainError;

use crate::handlers::ApiError;

/// Parse a path id; an id that cannot exist is reported as not found
pub(crate) fn parse_id(raw: &str, resource: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError(DomainError::not_found(resource)))
}
