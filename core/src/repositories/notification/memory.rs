//! In-memory implementation of NotificationRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::notification::{Notification, NotificationWithRecipient};
use crate::errors::DomainError;
use crate::repositories::user::UserRepository;

use super::trait_::NotificationRepository;

#[derive(Clone)]
pub struct InMemoryNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
    users: Arc<dyn UserRepository>,
}

impl InMemoryNotificationRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
            users,
        }
    }

    async fn ensure_recipient(&self, user_id: Uuid) -> Result<(), DomainError> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::DataIntegrity {
                message: format!("notification recipient {} does not exist", user_id),
            }),
        }
    }
}

fn newest_first(list: &mut [Notification]) {
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DomainError> {
        let mut list: Vec<Notification> = self
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut list);
        Ok(list)
    }

    async fn list_all(&self) -> Result<Vec<NotificationWithRecipient>, DomainError> {
        let mut list = self.notifications.read().await.clone();
        newest_first(&mut list);

        let mut joined = Vec::with_capacity(list.len());
        for notification in list {
            let recipient = self
                .users
                .find_by_id(notification.user_id)
                .await?
                .ok_or_else(|| DomainError::DataIntegrity {
                    message: format!("notification {} has no recipient", notification.id),
                })?;
            joined.push(NotificationWithRecipient {
                notification,
                recipient: recipient.contact(),
            });
        }
        Ok(joined)
    }

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count() as u64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let mut notifications = self.notifications.write().await;
        match notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
        {
            Some(notification) => {
                notification.is_read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut notifications = self.notifications.write().await;
        let mut changed = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            notification.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }

    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        self.ensure_recipient(notification.user_id).await?;
        self.notifications.write().await.push(notification.clone());
        Ok(notification)
    }

    async fn create_many(&self, notifications: Vec<Notification>) -> Result<u64, DomainError> {
        for notification in &notifications {
            self.ensure_recipient(notification.user_id).await?;
        }
        let count = notifications.len() as u64;
        self.notifications.write().await.extend(notifications);
        Ok(count)
    }
}
