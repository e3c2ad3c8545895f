//! Scheduled trip activities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::UserSummary;

/// A scheduled activity created by an organizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    /// Id of the creating user
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Field changes for an existing activity; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl Activity {
    pub fn new(
        title: String,
        description: Option<String>,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        location: Option<String>,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            start_time,
            end_time,
            location,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Applies only the fields present in `changes`
    pub fn apply(&mut self, changes: ActivityChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(start_time) = changes.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = changes.end_time {
            self.end_time = Some(end_time);
        }
        if let Some(location) = changes.location {
            self.location = Some(location);
        }
    }
}

/// Activity joined with its creator's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityWithCreator {
    pub activity: Activity,
    pub creator: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_apply_only_present_fields() {
        let start = Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap();
        let mut activity = Activity::new(
            "Skitour".to_string(),
            Some("Early start".to_string()),
            start,
            None,
            Some("Gabnalm".to_string()),
            Uuid::new_v4(),
        );

        activity.apply(ActivityChanges {
            title: Some("Rodeln".to_string()),
            ..Default::default()
        });

        assert_eq!(activity.title, "Rodeln");
        assert_eq!(activity.description.as_deref(), Some("Early start"));
        assert_eq!(activity.start_time, start);
        assert_eq!(activity.location.as_deref(), Some("Gabnalm"));
    }
}
