//! In-app notifications addressed to a single user.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::UserContact;

pub const PAYMENT_STATUS_TITLE: &str = "Payment status updated";
pub const NEW_ACTIVITY_TITLE: &str = "New activity created";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    /// Recipient
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl Notification {
    /// Creates a new unread notification
    pub fn new(user_id: Uuid, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
            is_read: false,
        }
    }

    /// Notification sent to a participant when the organizer changes their payment flag
    pub fn payment_status_changed(user_id: Uuid, has_paid: bool) -> Self {
        let body = if has_paid {
            "Your payment has been marked as received. Thank you!"
        } else {
            "Your payment status has been set to \"open\"."
        };
        Self::new(user_id, PAYMENT_STATUS_TITLE, body)
    }

    /// Notification announcing a freshly scheduled activity
    pub fn activity_created(user_id: Uuid, activity_title: &str) -> Self {
        Self::new(
            user_id,
            NEW_ACTIVITY_TITLE,
            format!("A new activity \"{}\" has been added!", activity_title),
        )
    }
}

/// Notification joined with its recipient, for the organizer overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationWithRecipient {
    pub notification: Notification,
    pub recipient: UserContact,
}
