use sqlx::PgPool;

use crate::common::AppError;
use crate::domains::entries::models::Entry;

/// Draw one winner uniformly at random among non-winning entries.
///
/// The selection and the flag flip are one atomic statement in the model
/// layer, so a re-run excludes every previously drawn entry and concurrent
/// draws never pick the same one.
pub async fn draw_winner(pool: &PgPool) -> Result<Entry, AppError> {
    let winner = Entry::draw_one(pool).await?.ok_or(AppError::EmptyPool)?;

    tracing::info!(contact = %winner.contact, "Winner drawn");
    Ok(winner)
}
