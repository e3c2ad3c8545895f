//! Notification feed and organizer broadcasts.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::notification::{Notification, NotificationWithRecipient};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{NotificationRepository, UserRepository};
use crate::services::validation::CreateNotificationRequest;

/// Who received a newly sent notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Addressed to the user named in the request
    Direct,
    /// Broadcast to every participant
    Broadcast { recipients: u64 },
}

pub struct NotificationService {
    notification_repository: Arc<dyn NotificationRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl NotificationService {
    pub fn new(
        notification_repository: Arc<dyn NotificationRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            notification_repository,
            user_repository,
        }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Notification>> {
        self.notification_repository.list_for_user(user_id).await
    }

    pub async fn list_all(&self) -> DomainResult<Vec<NotificationWithRecipient>> {
        self.notification_repository.list_all().await
    }

    pub async fn unread_count(&self, user_id: Uuid) -> DomainResult<u64> {
        self.notification_repository.count_unread(user_id).await
    }

    /// Mark one of the caller's notifications as read.
    ///
    /// Someone else's notification is reported as not found.
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> DomainResult<()> {
        if self.notification_repository.mark_read(id, user_id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("Notification"))
        }
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> DomainResult<u64> {
        self.notification_repository.mark_all_read(user_id).await
    }

    /// Send to the named user, or broadcast to all participants
    pub async fn send(&self, request: CreateNotificationRequest) -> DomainResult<Delivery> {
        match request.user_id {
            Some(user_id) => {
                if self.user_repository.find_by_id(user_id).await?.is_none() {
                    return Err(DomainError::not_found("User"));
                }
                self.notification_repository
                    .create(Notification::new(user_id, request.title, request.body))
                    .await?;
                Ok(Delivery::Direct)
            }
            None => {
                let recipients = self.user_repository.list_participant_ids(None).await?;
                let batch = recipients
                    .into_iter()
                    .map(|user_id| Notification::new(user_id, request.title.clone(), request.body.clone()))
                    .collect();
                let recipients = self.notification_repository.create_many(batch).await?;

                tracing::info!(recipients, "Notification broadcast to participants");
                Ok(Delivery::Broadcast { recipients })
            }
        }
    }
}
