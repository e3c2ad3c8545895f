//! MySQL implementation of the ActivityRepository trait.

use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use ha_core::domain::entities::activity::{Activity, ActivityWithCreator};
use ha_core::domain::entities::user::UserSummary;
use ha_core::errors::DomainError;
use ha_core::repositories::ActivityRepository;

use super::{column, query_failed, uuid_column};

const SELECT_WITH_CREATOR: &str = r#"
    SELECT a.id, a.title, a.description, a.start_time, a.end_time, a.location,
           a.created_by, a.created_at, u.name AS creator_name
    FROM activities a
    INNER JOIN users u ON u.id = a.created_by
"#;

/// MySQL implementation of ActivityRepository
pub struct MySqlActivityRepository {
    pool: MySqlPool,
}

impl MySqlActivityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_activity(row: &MySqlRow) -> Result<ActivityWithCreator, DomainError> {
        let created_by = uuid_column(row, "created_by")?;

        Ok(ActivityWithCreator {
            activity: Activity {
                id: uuid_column(row, "id")?,
                title: column(row, "title")?,
                description: column(row, "description")?,
                start_time: column(row, "start_time")?,
                end_time: column(row, "end_time")?,
                location: column(row, "location")?,
                created_by,
                created_at: column(row, "created_at")?,
            },
            creator: UserSummary {
                id: created_by,
                name: column(row, "creator_name")?,
            },
        })
    }
}

#[async_trait]
impl ActivityRepository for MySqlActivityRepository {
    async fn list(&self) -> Result<Vec<ActivityWithCreator>, DomainError> {
        let sql = format!("{} ORDER BY a.start_time ASC", SELECT_WITH_CREATOR);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("list activities"))?;

        rows.iter().map(Self::row_to_activity).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityWithCreator>, DomainError> {
        let sql = format!("{} WHERE a.id = ?", SELECT_WITH_CREATOR);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find activity by id"))?;

        row.as_ref().map(Self::row_to_activity).transpose()
    }

    async fn create(&self, activity: Activity) -> Result<ActivityWithCreator, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO activities
                (id, title, description, start_time, end_time, location, created_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(activity.id.to_string())
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.location)
        .bind(activity.created_by.to_string())
        .bind(activity.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => {
                return Err(DomainError::DataIntegrity {
                    message: format!("activity creator {} does not exist", activity.created_by),
                });
            }
            Err(e) => return Err(query_failed("insert activity")(e)),
        }

        self.find_by_id(activity.id)
            .await?
            .ok_or_else(|| DomainError::DataIntegrity {
                message: format!("activity {} vanished after insert", activity.id),
            })
    }

    async fn update(&self, activity: Activity) -> Result<Option<ActivityWithCreator>, DomainError> {
        sqlx::query(
            r#"
            UPDATE activities
            SET title = ?, description = ?, start_time = ?, end_time = ?, location = ?
            WHERE id = ?
            "#,
        )
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(&activity.location)
        .bind(activity.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(query_failed("update activity"))?;

        self.find_by_id(activity.id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("delete activity"))?;

        Ok(result.rows_affected() > 0)
    }
}
