use sqlx::PgPool;
use uuid::Uuid;

use crate::common::AppError;
use crate::domains::entries::contact::normalize_contact;
use crate::domains::entries::models::Entry;

/// Flag a registered entry as a winner without running a draw.
pub async fn mark_winner(raw_contact: &str, pool: &PgPool) -> Result<Entry, AppError> {
    let contact = normalize_contact(raw_contact)?;

    let entry = Entry::mark_winner(&contact, pool)
        .await?
        .ok_or(AppError::EntryNotFound)?;

    tracing::info!(contact = %entry.contact, "Entry marked as winner");
    Ok(entry)
}

/// Remove a single entry by id.
pub async fn remove_entry(id: Uuid, pool: &PgPool) -> Result<(), AppError> {
    if !Entry::delete_by_id(id, pool).await? {
        return Err(AppError::EntryNotFound);
    }

    tracing::info!(%id, "Entry removed");
    Ok(())
}

/// Remove every entry. Returns the number removed.
pub async fn clear_entries(pool: &PgPool) -> Result<u64, AppError> {
    let removed = Entry::clear(pool).await?;

    tracing::info!(removed, "Entries cleared");
    Ok(removed)
}

/// Current winners, most recent first, capped at `limit`.
pub async fn list_winners(limit: i64, pool: &PgPool) -> Result<Vec<Entry>, AppError> {
    Entry::find_winners(limit, pool).await.map_err(Into::into)
}
