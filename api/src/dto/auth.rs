//! Authentication response bodies.

use serde::{Deserialize, Serialize};

use ha_core::services::AuthSession;

use super::user::UserResponse;

/// Returned by register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, session: AuthSession) -> Self {
        Self {
            message: message.into(),
            user: UserResponse::from(&session.user),
            token: session.token,
        }
    }
}
