//! Demo data for local and staging runs.
//!
//! Seeding goes through the repository traits, so it works the same against
//! MySQL and the in-memory stores. It is idempotent: users are matched by
//! email and activities are only inserted into an empty schedule.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use ha_core::domain::entities::activity::Activity;
use ha_core::domain::entities::notification::Notification;
use ha_core::domain::entities::user::{Role, User};
use ha_core::repositories::{ActivityRepository, NotificationRepository, UserRepository};
use ha_core::services::PasswordHasher;

use crate::InfrastructureError;

pub const ORGANIZER_EMAIL: &str = "paul@huettenapp.de";
const ORGANIZER_PASSWORD: &str = "admin123";
const PARTICIPANT_PASSWORD: &str = "password123";

const WELCOME_TITLE: &str = "Welcome to HuettenApp";
const WELCOME_BODY: &str = "Great to have you on board! Check the schedule and the cabin details.";

/// (name, email, has_paid)
const PARTICIPANTS: &[(&str, &str, bool)] = &[
    ("Felix", "felix@example.com", true),
    ("Morten", "morten@example.com", false),
    ("Jessi", "jessi@example.com", true),
    ("Leo", "leo@example.com", false),
    ("Jose", "jose@example.com", true),
];

/// (title, description, location, day offset, start hour, end hour)
const SCHEDULE: &[(&str, &str, &str, u32, u32, u32)] = &[
    ("Arrival", "Check-in at the cabin, unpack and settle in", "Gabnalm", 0, 13, 17),
    ("BBQ evening", "Grill on the terrace to kick off the weekend", "Gabnalm terrace", 0, 19, 22),
    ("Walchensee trip", "Day trip to the lake, swimming and SUP", "Walchensee", 1, 10, 16),
    ("Zahmer Kaiser hike", "Summit hike with lunch at the hut", "Zahmer Kaiser", 2, 9, 17),
    ("Beerpong day 1", "Group stage of the tournament", "Gabnalm", 2, 20, 23),
    ("Beerpong finale", "Knockout round and award ceremony", "Gabnalm", 3, 20, 23),
];

/// What a seeding run actually inserted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub activities_created: usize,
    pub notifications_created: u64,
}

/// Inserts the demo organizer, participants and trip schedule
pub struct DemoSeeder {
    users: Arc<dyn UserRepository>,
    activities: Arc<dyn ActivityRepository>,
    notifications: Arc<dyn NotificationRepository>,
    hasher: PasswordHasher,
}

impl DemoSeeder {
    pub fn new(
        users: Arc<dyn UserRepository>,
        activities: Arc<dyn ActivityRepository>,
        notifications: Arc<dyn NotificationRepository>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            activities,
            notifications,
            hasher,
        }
    }

    pub async fn run(&self) -> Result<SeedReport, InfrastructureError> {
        let mut report = SeedReport::default();

        let organizer = match self.users.find_by_email(ORGANIZER_EMAIL).await? {
            Some(existing) => existing,
            None => {
                let hash = self.hasher.hash(ORGANIZER_PASSWORD).await?;
                let mut organizer =
                    User::new("Paul".to_string(), ORGANIZER_EMAIL.to_string(), hash, Role::Admin);
                organizer.has_paid = true;
                report.users_created += 1;
                self.users.create(organizer).await?
            }
        };

        let mut welcomes = Vec::new();
        for (name, email, has_paid) in PARTICIPANTS {
            if self.users.find_by_email(email).await?.is_some() {
                continue;
            }
            let hash = self.hasher.hash(PARTICIPANT_PASSWORD).await?;
            let mut participant = User::new_participant(name.to_string(), email.to_string(), hash);
            participant.has_paid = *has_paid;
            let participant = self.users.create(participant).await?;
            report.users_created += 1;
            welcomes.push(Notification::new(participant.id, WELCOME_TITLE, WELCOME_BODY));
        }
        report.notifications_created = self.notifications.create_many(welcomes).await?;

        if self.activities.list().await?.is_empty() {
            for (title, description, location, day, start, end) in SCHEDULE {
                let activity = Activity::new(
                    title.to_string(),
                    Some(description.to_string()),
                    trip_time(*day, *start)?,
                    Some(trip_time(*day, *end)?),
                    Some(location.to_string()),
                    organizer.id,
                );
                self.activities.create(activity).await?;
                report.activities_created += 1;
            }
        }

        tracing::info!(
            users = report.users_created,
            activities = report.activities_created,
            notifications = report.notifications_created,
            "Demo data seeded"
        );

        Ok(report)
    }
}

/// Trip days start on 4 June 2025
fn trip_time(day: u32, hour: u32) -> Result<DateTime<Utc>, InfrastructureError> {
    Utc.with_ymd_and_hms(2025, 6, 4 + day, hour, 0, 0)
        .single()
        .ok_or_else(|| InfrastructureError::Seed(format!("invalid trip time day {} hour {}", day, hour)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ha_core::repositories::memory::{
        InMemoryActivityRepository, InMemoryNotificationRepository, InMemoryUserRepository,
    };

    fn seeder() -> (DemoSeeder, Arc<dyn UserRepository>, Arc<dyn ActivityRepository>) {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let activities: Arc<dyn ActivityRepository> =
            Arc::new(InMemoryActivityRepository::new(users.clone()));
        let notifications: Arc<dyn NotificationRepository> =
            Arc::new(InMemoryNotificationRepository::new(users.clone()));
        let seeder = DemoSeeder::new(
            users.clone(),
            activities.clone(),
            notifications,
            PasswordHasher::new(4),
        );
        (seeder, users, activities)
    }

    #[tokio::test]
    async fn test_seed_inserts_demo_data() {
        let (seeder, users, activities) = seeder();

        let report = seeder.run().await.unwrap();
        assert_eq!(report.users_created, 6);
        assert_eq!(report.activities_created, 6);
        assert_eq!(report.notifications_created, 5);

        let organizer = users.find_by_email(ORGANIZER_EMAIL).await.unwrap().unwrap();
        assert!(organizer.is_admin());
        assert!(organizer.has_paid);

        let schedule = activities.list().await.unwrap();
        assert_eq!(schedule[0].activity.title, "Arrival");
        assert_eq!(schedule[0].creator.name, "Paul");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (seeder, users, activities) = seeder();

        seeder.run().await.unwrap();
        let second = seeder.run().await.unwrap();

        assert_eq!(second, SeedReport::default());
        assert_eq!(users.list_all().await.unwrap().len(), 6);
        assert_eq!(activities.list().await.unwrap().len(), 6);
    }
}
