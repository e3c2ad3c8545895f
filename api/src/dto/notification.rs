//! Notification response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ha_core::domain::entities::notification::{Notification, NotificationWithRecipient};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            body: notification.body,
            created_at: notification.created_at,
            is_read: notification.is_read,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Organizer overview entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationWithRecipientResponse {
    #[serde(flatten)]
    pub notification: NotificationResponse,
    pub user: RecipientResponse,
}

impl From<NotificationWithRecipient> for NotificationWithRecipientResponse {
    fn from(value: NotificationWithRecipient) -> Self {
        Self {
            notification: value.notification.into(),
            user: RecipientResponse {
                id: value.recipient.id,
                name: value.recipient.name,
                email: value.recipient.email,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationListResponse<T> {
    pub notifications: Vec<T>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}
