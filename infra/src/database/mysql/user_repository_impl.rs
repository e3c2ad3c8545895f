//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, MySqlPool};
use uuid::Uuid;

use ha_core::domain::entities::user::{Role, User};
use ha_core::errors::DomainError;
use ha_core::repositories::UserRepository;

use super::{column, query_failed, uuid_column};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    ///
    /// The role column is parsed here and nowhere else.
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let role: String = column(row, "role")?;

        Ok(User {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role: role.parse::<Role>()?,
            has_paid: column(row, "has_paid")?,
            registered_at: column(row, "registered_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, role, has_paid, registered_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, role, has_paid, registered_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, has_paid, registered_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.has_paid)
        .bind(user.registered_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(DomainError::Conflict {
                message: "A user with this email already exists".to_string(),
            }),
            Err(e) => Err(query_failed("insert user")(e)),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, role, has_paid, registered_at
            FROM users
            ORDER BY registered_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("list users"))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn list_participant_ids(&self, excluding: Option<Uuid>) -> Result<Vec<Uuid>, DomainError> {
        let excluded = excluding.map(|id| id.to_string());
        let rows = sqlx::query(
            r#"
            SELECT id
            FROM users
            WHERE role = ? AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(Role::Participant.as_str())
        .bind(&excluded)
        .bind(&excluded)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("list participant ids"))?;

        rows.iter().map(|row| uuid_column(row, "id")).collect()
    }

    async fn set_payment_status(&self, id: Uuid, has_paid: bool) -> Result<Option<User>, DomainError> {
        sqlx::query("UPDATE users SET has_paid = ? WHERE id = ?")
            .bind(has_paid)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("update payment status"))?;

        // MySQL reports zero affected rows when the flag is unchanged
        self.find_by_id(id).await
    }
}
