use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// AdminAccount model - SQL persistence layer
///
/// Created once via signup, never mutated afterwards. `username` carries a
/// unique index.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Insert a new admin account.
    ///
    /// A taken username surfaces as a unique violation for the caller to map.
    pub async fn create(
        username: &str,
        password_hash: &str,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO admin_accounts (username, password_hash)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Find admin account by username
    pub async fn find_by_username(
        username: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM admin_accounts WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
