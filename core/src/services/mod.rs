//! Business services containing domain logic and use cases.

pub mod access;
pub mod activity;
pub mod auth;
pub mod notification;
pub mod password;
pub mod token;
pub mod user;
pub mod validation;

// Re-export commonly used types
pub use activity::ActivityService;
pub use auth::{AuthService, AuthSession};
pub use notification::{Delivery, NotificationService};
pub use password::PasswordHasher;
pub use token::TokenService;
pub use user::UserService;
