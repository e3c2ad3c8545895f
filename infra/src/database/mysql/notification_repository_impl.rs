//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use ha_core::domain::entities::notification::{Notification, NotificationWithRecipient};
use ha_core::domain::entities::user::UserContact;
use ha_core::errors::DomainError;
use ha_core::repositories::NotificationRepository;

use super::{column, query_failed, uuid_column};

/// MySQL implementation of NotificationRepository
pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &MySqlRow) -> Result<Notification, DomainError> {
        Ok(Notification {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            title: column(row, "title")?,
            body: column(row, "body")?,
            created_at: column(row, "created_at")?,
            is_read: column(row, "is_read")?,
        })
    }

    fn row_to_notification_with_recipient(
        row: &MySqlRow,
    ) -> Result<NotificationWithRecipient, DomainError> {
        let notification = Self::row_to_notification(row)?;
        Ok(NotificationWithRecipient {
            recipient: UserContact {
                id: notification.user_id,
                name: column(row, "recipient_name")?,
                email: column(row, "recipient_email")?,
            },
            notification,
        })
    }

    fn map_insert_error(notification: &Notification, e: sqlx::Error) -> DomainError {
        match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => DomainError::DataIntegrity {
                message: format!("notification recipient {} does not exist", notification.user_id),
            },
            other => query_failed("insert notification")(other),
        }
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, body, created_at, is_read
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("list notifications for user"))?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn list_all(&self) -> Result<Vec<NotificationWithRecipient>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.user_id, n.title, n.body, n.created_at, n.is_read,
                   u.name AS recipient_name, u.email AS recipient_email
            FROM notifications n
            INNER JOIN users u ON u.id = n.user_id
            ORDER BY n.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("list all notifications"))?;

        rows.iter().map(Self::row_to_notification_with_recipient).collect()
    }

    async fn count_unread(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = ? AND is_read = FALSE",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed("count unread notifications"))?;

        Ok(count.max(0) as u64)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<bool, DomainError> {
        let owned = sqlx::query("SELECT id FROM notifications WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find notification"))?;

        if owned.is_none() {
            return Ok(false);
        }

        // Affected rows would be zero for an already-read notification
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("mark notification read"))?;

        Ok(true)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = ? AND is_read = FALSE",
        )
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(query_failed("mark all notifications read"))?;

        Ok(result.rows_affected())
    }

    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, title, body, created_at, is_read)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(notification.id.to_string())
        .bind(notification.user_id.to_string())
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(notification.created_at)
        .bind(notification.is_read)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_insert_error(&notification, e))?;

        Ok(notification)
    }

    async fn create_many(&self, notifications: Vec<Notification>) -> Result<u64, DomainError> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_failed("begin notification batch"))?;

        for notification in &notifications {
            sqlx::query(
                r#"
                INSERT INTO notifications (id, user_id, title, body, created_at, is_read)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(notification.id.to_string())
            .bind(notification.user_id.to_string())
            .bind(&notification.title)
            .bind(&notification.body)
            .bind(notification.created_at)
            .bind(notification.is_read)
            .execute(&mut *tx)
            .await
            .map_err(|e| Self::map_insert_error(notification, e))?;
        }

        tx.commit()
            .await
            .map_err(query_failed("commit notification batch"))?;

        Ok(notifications.len() as u64)
    }
}
