use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Entry model - SQL persistence layer
///
/// One row per registered contact. `contact` is stored in canonical form and
/// carries a unique index; `is_winner` only ever flips false -> true.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Entry {
    pub id: Uuid,
    pub contact: String,
    pub display_name: Option<String>,
    pub is_winner: bool,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Insert a new entry with the winner flag unset.
    ///
    /// A duplicate contact surfaces as a unique violation for the caller to
    /// map.
    pub async fn create(
        contact: &str,
        display_name: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO entries (contact, display_name)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(contact)
        .bind(display_name)
        .fetch_one(pool)
        .await
    }

    /// Find entry by canonical contact
    pub async fn find_by_contact(contact: &str, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM entries WHERE contact = $1")
            .bind(contact)
            .fetch_optional(pool)
            .await
    }

    /// Uniformly select one non-winning entry and flag it, atomically.
    ///
    /// Selection and flag flip happen in a single statement; `FOR UPDATE
    /// SKIP LOCKED` keeps two concurrent draws from landing on the same row.
    /// Returns `None` when no eligible entries remain.
    pub async fn draw_one(pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE entries SET is_winner = TRUE
             WHERE id = (
                 SELECT id FROM entries
                 WHERE is_winner = FALSE
                 ORDER BY random()
                 LIMIT 1
                 FOR UPDATE SKIP LOCKED
             )
             RETURNING *",
        )
        .fetch_optional(pool)
        .await
    }

    /// Flag a specific entry as a winner. Returns `None` if the contact is
    /// not registered.
    pub async fn mark_winner(contact: &str, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE entries SET is_winner = TRUE WHERE contact = $1 RETURNING *",
        )
        .bind(contact)
        .fetch_optional(pool)
        .await
    }

    /// Current winners, most recent registration first.
    pub async fn find_winners(limit: i64, pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM entries
             WHERE is_winner = TRUE
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Delete one entry. Returns whether a row was removed.
    pub async fn delete_by_id(id: Uuid, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all entries. Returns the number removed.
    pub async fn clear(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
