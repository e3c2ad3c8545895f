//! Notification repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::notification::{Notification, NotificationWithRecipient};
use crate::errors::DomainError;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications addressed to one user, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DomainError>;

    /// Every notification with its recipient, newest first
    async fn list_all(&self) -> Result<Vec<NotificationWithRecipient>, DomainError>;

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Mark one notification as read, only if it belongs to `user_id`
    ///
    /// # Returns
    /// * `Ok(true)` - The notification exists and belongs to the user
    /// * `Ok(false)` - Unknown id or owned by someone else
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError>;

    /// Mark all of a user's unread notifications as read, returning how many changed
    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DomainError>;

    async fn create(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// Insert a batch, returning the number stored
    async fn create_many(&self, notifications: Vec<Notification>) -> Result<u64, DomainError>;
}
