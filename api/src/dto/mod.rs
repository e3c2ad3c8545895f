//! Request and response bodies exchanged over HTTP.
//!
//! Field names are camelCase on the wire. Request bodies are the payload
//! types from `ha_core::services::validation`.

pub mod activity;
pub mod auth;
pub mod notification;
pub mod user;

use serde::{Deserialize, Serialize};

pub use activity::{ActivityEnvelope, ActivityListResponse, ActivityResponse, CreatorResponse};
pub use auth::AuthResponse;
pub use notification::{
    NotificationListResponse, NotificationResponse, NotificationWithRecipientResponse,
    RecipientResponse, UnreadCountResponse,
};
pub use user::{
    PaymentStatusResponse, UserEnvelope, UserListResponse, UserResponse, UserUpdatedResponse,
};

/// Body of operations that only report an outcome
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
