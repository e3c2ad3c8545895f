//! Activity repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::activity::{Activity, ActivityWithCreator};
use crate::errors::DomainError;

/// Persistence operations for scheduled activities
///
/// Reads always return the activity joined with its creator summary.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// All activities ordered by start time, earliest first
    async fn list(&self) -> Result<Vec<ActivityWithCreator>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityWithCreator>, DomainError>;

    async fn create(&self, activity: Activity) -> Result<ActivityWithCreator, DomainError>;

    /// Overwrite a stored activity
    ///
    /// # Returns
    /// * `Ok(None)` - No activity with this id
    async fn update(&self, activity: Activity) -> Result<Option<ActivityWithCreator>, DomainError>;

    /// # Returns
    /// * `Ok(true)` - Activity was deleted
    /// * `Ok(false)` - Activity not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
