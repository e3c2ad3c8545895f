//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations parse the stored role exactly once; an unknown value is
/// reported as `DomainError::DataIntegrity` instead of being coerced.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The email is already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// All users, most recently registered first
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Ids of every participant, optionally leaving one user out
    async fn list_participant_ids(&self, excluding: Option<Uuid>) -> Result<Vec<Uuid>, DomainError>;

    /// Set the payment flag
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with this id
    async fn set_payment_status(&self, id: Uuid, has_paid: bool) -> Result<Option<User>, DomainError>;
}
