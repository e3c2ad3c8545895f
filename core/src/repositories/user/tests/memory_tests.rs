//! Unit tests for the in-memory user repository

use chrono::{Duration, Utc};

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

fn user(name: &str, email: &str, role: Role) -> User {
    User::new(name.to_string(), email.to_string(), "digest".to_string(), role)
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();
    let created = repo
        .create(user("Morten", "morten@example.com", Role::Participant))
        .await
        .unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.as_ref().map(|u| u.name.as_str()), Some("Morten"));

    let by_email = repo.find_by_email("morten@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let repo = InMemoryUserRepository::new();
    repo.create(user("Jessi", "jessi@example.com", Role::Participant))
        .await
        .unwrap();

    let result = repo
        .create(user("Other Jessi", "jessi@example.com", Role::Participant))
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let repo = InMemoryUserRepository::new();
    let lower = repo
        .create(user("Felix", "felix@example.com", Role::Participant))
        .await
        .unwrap();
    let upper = repo
        .create(user("Felix", "Felix@example.com", Role::Participant))
        .await
        .unwrap();

    assert_ne!(lower.id, upper.id);
    let found = repo.find_by_email("Felix@example.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(upper.id));
}

#[tokio::test]
async fn test_list_all_newest_first() {
    let repo = InMemoryUserRepository::new();
    let mut older = user("Leo", "leo@example.com", Role::Participant);
    older.registered_at = Utc::now() - Duration::days(3);
    let newer = user("Jose", "jose@example.com", Role::Participant);

    repo.create(older).await.unwrap();
    repo.create(newer).await.unwrap();

    let names: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Jose", "Leo"]);
}

#[tokio::test]
async fn test_participant_ids_exclude_admins_and_creator() {
    let repo = InMemoryUserRepository::new();
    let admin = repo
        .create(user("Paul", "paul@example.com", Role::Admin))
        .await
        .unwrap();
    let felix = repo
        .create(user("Felix", "felix@example.com", Role::Participant))
        .await
        .unwrap();
    let leo = repo
        .create(user("Leo", "leo@example.com", Role::Participant))
        .await
        .unwrap();

    let all = repo.list_participant_ids(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(!all.contains(&admin.id));

    let without_felix = repo.list_participant_ids(Some(felix.id)).await.unwrap();
    assert_eq!(without_felix, vec![leo.id]);
}

#[tokio::test]
async fn test_set_payment_status() {
    let repo = InMemoryUserRepository::new();
    let felix = repo
        .create(user("Felix", "felix@example.com", Role::Participant))
        .await
        .unwrap();

    let updated = repo.set_payment_status(felix.id, true).await.unwrap();
    assert_eq!(updated.map(|u| u.has_paid), Some(true));

    let missing = repo
        .set_payment_status(uuid::Uuid::new_v4(), true)
        .await
        .unwrap();
    assert!(missing.is_none());
}
