//! Activity response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ha_core::domain::entities::activity::ActivityWithCreator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatorResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub creator: CreatorResponse,
}

impl From<ActivityWithCreator> for ActivityResponse {
    fn from(value: ActivityWithCreator) -> Self {
        let ActivityWithCreator { activity, creator } = value;
        Self {
            id: activity.id,
            title: activity.title,
            description: activity.description,
            start_time: activity.start_time,
            end_time: activity.end_time,
            location: activity.location,
            creator: CreatorResponse {
                id: creator.id,
                name: creator.name,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityListResponse {
    pub activities: Vec<ActivityResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityEnvelope {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub activity: ActivityResponse,
}
