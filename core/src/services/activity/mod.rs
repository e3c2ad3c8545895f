//! Activity scheduling.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::activity::{Activity, ActivityWithCreator};
use crate::domain::entities::identity::IdentityClaims;
use crate::domain::entities::notification::Notification;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ActivityRepository, NotificationRepository, UserRepository};
use crate::services::validation::{CreateActivityRequest, UpdateActivityRequest};

pub struct ActivityService {
    activity_repository: Arc<dyn ActivityRepository>,
    user_repository: Arc<dyn UserRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
}

impl ActivityService {
    pub fn new(
        activity_repository: Arc<dyn ActivityRepository>,
        user_repository: Arc<dyn UserRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            activity_repository,
            user_repository,
            notification_repository,
        }
    }

    /// All activities, earliest start first
    pub async fn list(&self) -> DomainResult<Vec<ActivityWithCreator>> {
        self.activity_repository.list().await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<ActivityWithCreator> {
        self.activity_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Activity"))
    }

    /// Schedule an activity and notify every participant except the creator
    pub async fn create(
        &self,
        creator: &IdentityClaims,
        request: CreateActivityRequest,
    ) -> DomainResult<ActivityWithCreator> {
        let activity = Activity::new(
            request.title,
            request.description,
            request.start_time,
            request.end_time,
            request.location,
            creator.user_id,
        );
        let created = self.activity_repository.create(activity).await?;

        let recipients = self
            .user_repository
            .list_participant_ids(Some(creator.user_id))
            .await?;
        let notifications: Vec<Notification> = recipients
            .into_iter()
            .map(|user_id| Notification::activity_created(user_id, &created.activity.title))
            .collect();
        let sent = self.notification_repository.create_many(notifications).await?;

        tracing::info!(
            activity_id = %created.activity.id,
            notified = sent,
            "Activity created"
        );
        Ok(created)
    }

    /// Apply the fields present in `request` to an existing activity
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateActivityRequest,
    ) -> DomainResult<ActivityWithCreator> {
        let mut activity = self.get(id).await?.activity;
        activity.apply(request.into());

        self.activity_repository
            .update(activity)
            .await?
            .ok_or_else(|| DomainError::not_found("Activity"))
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if self.activity_repository.delete(id).await? {
            tracing::info!(activity_id = %id, "Activity deleted");
            Ok(())
        } else {
            Err(DomainError::not_found("Activity"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::domain::entities::notification::NEW_ACTIVITY_TITLE;
    use crate::domain::entities::user::{Role, User};
    use crate::repositories::memory::{
        InMemoryActivityRepository, InMemoryNotificationRepository, InMemoryUserRepository,
    };

    struct Fixture {
        service: ActivityService,
        notifications: Arc<InMemoryNotificationRepository>,
        admin: User,
        participants: Vec<User>,
    }

    async fn setup() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let admin = users
            .create(User::new(
                "Paul".to_string(),
                "paul@example.com".to_string(),
                "digest".to_string(),
                Role::Admin,
            ))
            .await
            .unwrap();

        let mut participants = Vec::new();
        for name in ["Felix", "Morten"] {
            participants.push(
                users
                    .create(User::new(
                        name.to_string(),
                        format!("{}@example.com", name.to_lowercase()),
                        "digest".to_string(),
                        Role::Participant,
                    ))
                    .await
                    .unwrap(),
            );
        }

        let activities = Arc::new(InMemoryActivityRepository::new(users.clone()));
        let notifications = Arc::new(InMemoryNotificationRepository::new(users.clone()));

        Fixture {
            service: ActivityService::new(activities, users, notifications.clone()),
            notifications,
            admin,
            participants,
        }
    }

    fn create_request(title: &str) -> CreateActivityRequest {
        CreateActivityRequest {
            title: title.to_string(),
            description: None,
            start_time: Utc::now() + Duration::days(1),
            end_time: None,
            location: Some("Gabnalm".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_notifies_participants() {
        let fx = setup().await;
        let creator = IdentityClaims::from(&fx.admin);

        let created = fx
            .service
            .create(&creator, create_request("Fackelwanderung"))
            .await
            .unwrap();
        assert_eq!(created.creator.name, "Paul");

        for participant in &fx.participants {
            let inbox = fx.notifications.list_for_user(participant.id).await.unwrap();
            assert_eq!(inbox.len(), 1);
            assert_eq!(inbox[0].title, NEW_ACTIVITY_TITLE);
            assert!(inbox[0].body.contains("Fackelwanderung"));
        }
        assert!(fx
            .notifications
            .list_for_user(fx.admin.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_creator_is_not_notified() {
        let fx = setup().await;
        // A participant-held token reaching the service directly
        let creator = IdentityClaims::from(&fx.participants[0]);

        fx.service
            .create(&creator, create_request("Kartenabend"))
            .await
            .unwrap();

        assert_eq!(fx.notifications.count_unread(fx.participants[0].id).await.unwrap(), 0);
        assert_eq!(fx.notifications.count_unread(fx.participants[1].id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let fx = setup().await;
        let creator = IdentityClaims::from(&fx.admin);
        let created = fx
            .service
            .create(&creator, create_request("Sauna"))
            .await
            .unwrap();
        let id = created.activity.id;

        let updated = fx
            .service
            .update(
                id,
                UpdateActivityRequest {
                    location: Some("Dorf".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.activity.title, "Sauna");
        assert_eq!(updated.activity.location.as_deref(), Some("Dorf"));

        fx.service.delete(id).await.unwrap();
        assert_eq!(
            fx.service.delete(id).await.unwrap_err(),
            DomainError::not_found("Activity")
        );
        assert!(fx
            .service
            .update(id, UpdateActivityRequest::default())
            .await
            .is_err());
    }
}
