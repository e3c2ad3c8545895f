//! Unit tests for the in-memory activity repository

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::activity::Activity;
use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;
use crate::repositories::activity::{ActivityRepository, InMemoryActivityRepository};
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

async fn setup() -> (InMemoryActivityRepository, User) {
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
    (InMemoryActivityRepository::new(users), admin)
}

fn activity(title: &str, offset_hours: i64, created_by: Uuid) -> Activity {
    Activity::new(
        title.to_string(),
        None,
        Utc::now() + Duration::hours(offset_hours),
        None,
        None,
        created_by,
    )
}

#[tokio::test]
async fn test_list_orders_by_start_time() {
    let (repo, admin) = setup().await;
    repo.create(activity("Later", 48, admin.id)).await.unwrap();
    repo.create(activity("Sooner", 2, admin.id)).await.unwrap();

    let titles: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.activity.title)
        .collect();
    assert_eq!(titles, vec!["Sooner", "Later"]);
}

#[tokio::test]
async fn test_create_joins_creator() {
    let (repo, admin) = setup().await;
    let created = repo.create(activity("Sauna", 5, admin.id)).await.unwrap();
    assert_eq!(created.creator.name, "Paul");
    assert_eq!(created.creator.id, admin.id);
}

#[tokio::test]
async fn test_create_with_unknown_creator_fails() {
    let (repo, _) = setup().await;
    let result = repo.create(activity("Ghost", 1, Uuid::new_v4())).await;
    assert!(matches!(result, Err(DomainError::DataIntegrity { .. })));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_missing() {
    let (repo, admin) = setup().await;
    let missing = activity("Missing", 1, admin.id);
    assert!(repo.update(missing.clone()).await.unwrap().is_none());
    assert!(!repo.delete(missing.id).await.unwrap());

    let created = repo.create(activity("Hike", 3, admin.id)).await.unwrap();
    assert!(repo.delete(created.activity.id).await.unwrap());
    assert!(repo.find_by_id(created.activity.id).await.unwrap().is_none());
}
