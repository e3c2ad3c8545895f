//! # HuettenApp Core
//!
//! Domain layer for the HuettenApp backend: entities, repository interfaces,
//! the credential hasher, token issuer, request validator and access
//! policies, plus the services the HTTP layer calls into.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Activity, ActivityChanges, ActivityWithCreator, IdentityClaims, Notification,
    NotificationWithRecipient, Role, User, UserContact, UserSummary,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{ActivityRepository, NotificationRepository, UserRepository};
pub use services::{
    ActivityService, AuthService, AuthSession, Delivery, NotificationService, PasswordHasher,
    TokenService, UserService,
};
