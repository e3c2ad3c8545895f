//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations. UUIDs are stored as `CHAR(36)`.

pub mod activity_repository_impl;
pub mod notification_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use activity_repository_impl::MySqlActivityRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::{mysql::MySqlRow, MySql, Row};
use uuid::Uuid;

use ha_core::errors::DomainError;

/// Log a failed query and turn it into an internal error
pub(crate) fn query_failed(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, context, "Database query failed");
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

/// Read one column, mapping decode failures to an internal error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get::<T, _>(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Read a `CHAR(36)` column as a UUID
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|_| DomainError::DataIntegrity {
        message: format!("column {} holds a malformed id '{}'", name, raw),
    })
}
