//! In-memory implementation of ActivityRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::activity::{Activity, ActivityWithCreator};
use crate::errors::DomainError;
use crate::repositories::user::UserRepository;

use super::trait_::ActivityRepository;

/// Activity store that resolves creators through a user repository
#[derive(Clone)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<HashMap<Uuid, Activity>>>,
    users: Arc<dyn UserRepository>,
}

impl InMemoryActivityRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(HashMap::new())),
            users,
        }
    }

    async fn with_creator(&self, activity: Activity) -> Result<ActivityWithCreator, DomainError> {
        let creator = self
            .users
            .find_by_id(activity.created_by)
            .await?
            .ok_or_else(|| DomainError::DataIntegrity {
                message: format!("activity {} has no creator", activity.id),
            })?;

        Ok(ActivityWithCreator {
            activity,
            creator: creator.summary(),
        })
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> Result<Vec<ActivityWithCreator>, DomainError> {
        let mut activities: Vec<Activity> = self.activities.read().await.values().cloned().collect();
        activities.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        let mut list = Vec::with_capacity(activities.len());
        for activity in activities {
            list.push(self.with_creator(activity).await?);
        }
        Ok(list)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityWithCreator>, DomainError> {
        let activity = self.activities.read().await.get(&id).cloned();
        match activity {
            Some(activity) => Ok(Some(self.with_creator(activity).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, activity: Activity) -> Result<ActivityWithCreator, DomainError> {
        // Foreign key on created_by
        let joined = self.with_creator(activity.clone()).await?;
        self.activities.write().await.insert(activity.id, activity);
        Ok(joined)
    }

    async fn update(&self, activity: Activity) -> Result<Option<ActivityWithCreator>, DomainError> {
        {
            let mut activities = self.activities.write().await;
            match activities.get_mut(&activity.id) {
                Some(stored) => *stored = activity.clone(),
                None => return Ok(None),
            }
        }
        Ok(Some(self.with_creator(activity).await?))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.activities.write().await.remove(&id).is_some())
    }
}
