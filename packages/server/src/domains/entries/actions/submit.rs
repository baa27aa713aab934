use sqlx::PgPool;

use crate::common::error::is_unique_violation;
use crate::common::AppError;
use crate::domains::entries::contact::normalize_contact;
use crate::domains::entries::models::Entry;

/// Register a participant contact.
///
/// Validation happens before the store is touched; the unique index on
/// `contact` is the duplicate check, so two concurrent submissions of the
/// same number cannot both succeed.
pub async fn submit_entry(
    raw_contact: &str,
    display_name: Option<&str>,
    pool: &PgPool,
) -> Result<Entry, AppError> {
    let contact = normalize_contact(raw_contact)?;

    let display_name = display_name.map(str::trim).filter(|n| !n.is_empty());

    match Entry::create(&contact, display_name, pool).await {
        Ok(entry) => {
            tracing::info!(contact = %entry.contact, "Entry registered");
            Ok(entry)
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateContact),
        Err(e) => Err(e.into()),
    }
}
