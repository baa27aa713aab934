use serde::Serialize;
use sqlx::PgPool;

use crate::common::AppError;
use crate::domains::entries::contact::normalize_contact;
use crate::domains::entries::models::Entry;
use crate::domains::entries::WINNERS_PAGE_SIZE;

/// Result of a participant checking their contact.
///
/// Non-winners get the current public winners list - contact values only,
/// never internal IDs.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum CheckOutcome {
    Winner {
        contact: String,
        message: String,
    },
    NotWinner {
        contact: String,
        winners: Vec<String>,
        message: String,
    },
}

pub async fn check_contact(raw_contact: &str, pool: &PgPool) -> Result<CheckOutcome, AppError> {
    let contact = normalize_contact(raw_contact)?;

    let entry = Entry::find_by_contact(&contact, pool).await?;

    if entry.map(|e| e.is_winner).unwrap_or(false) {
        return Ok(CheckOutcome::Winner {
            contact,
            message: "Congratulations! You are a winner!".to_string(),
        });
    }

    let winners = Entry::find_winners(WINNERS_PAGE_SIZE, pool)
        .await?
        .into_iter()
        .map(|e| e.contact)
        .collect();

    Ok(CheckOutcome::NotWinner {
        contact,
        winners,
        message: "Sorry, you didn't win this time. Keep trying!".to_string(),
    })
}
