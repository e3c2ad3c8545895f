//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Process-local user store used by tests and storage-less runs
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "A user with this email already exists".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut list: Vec<User> = users.values().cloned().collect();
        list.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(list)
    }

    async fn list_participant_ids(&self, excluding: Option<Uuid>) -> Result<Vec<Uuid>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.role == Role::Participant && Some(u.id) != excluding)
            .map(|u| u.id)
            .collect())
    }

    async fn set_payment_status(&self, id: Uuid, has_paid: bool) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            user.has_paid = has_paid;
            user.clone()
        }))
    }
}
