use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::entries::models::Entry;

/// Public API representation of an entry.
///
/// Carries only the fields a client may see; internal store details never
/// leave the data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub id: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub is_winner: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryData {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            contact: entry.contact,
            display_name: entry.display_name,
            is_winner: entry.is_winner,
            created_at: entry.created_at,
        }
    }
}
