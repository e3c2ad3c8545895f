//! # Infrastructure Layer
//!
//! Concrete persistence for the HuettenApp backend.
//!
//! ## Architecture
//!
//! - **Database**: MySQL connection pool, migrations and repository
//!   implementations using SQLx
//! - **Seed**: demo organizer, participants and trip schedule
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use ha_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

pub mod seed;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlActivityRepository, MySqlNotificationRepository, MySqlUserRepository,
};
pub use seed::{DemoSeeder, SeedReport};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Demo data could not be inserted
    #[error("Seed error: {0}")]
    Seed(String),
}

impl From<DomainError> for InfrastructureError {
    fn from(error: DomainError) -> Self {
        InfrastructureError::Seed(error.to_string())
    }
}
