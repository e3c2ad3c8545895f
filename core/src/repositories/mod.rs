pub mod activity;
pub mod notification;
pub mod user;

pub use activity::ActivityRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;

/// In-memory implementations backing tests and storage-less runs
pub mod memory {
    pub use super::activity::InMemoryActivityRepository;
    pub use super::notification::InMemoryNotificationRepository;
    pub use super::user::InMemoryUserRepository;
}
