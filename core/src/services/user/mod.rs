//! User listing and payment tracking.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{NotificationRepository, UserRepository};
use crate::services::validation::UpdatePaymentStatusRequest;

pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            user_repository,
            notification_repository,
        }
    }

    /// All users, newest registration first
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.list_all().await
    }

    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Set a participant's payment flag and tell them about it
    pub async fn update_payment_status(
        &self,
        request: UpdatePaymentStatusRequest,
    ) -> DomainResult<User> {
        let user = self
            .user_repository
            .set_payment_status(request.user_id, request.has_paid)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        self.notification_repository
            .create(Notification::payment_status_changed(user.id, request.has_paid))
            .await?;

        tracing::info!(user_id = %user.id, has_paid = request.has_paid, "Payment status updated");
        Ok(user)
    }
}
