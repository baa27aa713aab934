use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::AppError;
use crate::domains::entries::actions::{clear_entries, remove_entry, submit_entry};
use crate::domains::entries::data::EntryData;
use crate::server::app::AppState;
use crate::server::middleware::{require_admin, AuthAdmin};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntryRequest {
    pub contact: String,
    pub display_name: Option<String>,
}

#[derive(Serialize)]
pub struct EntryResponse {
    pub success: bool,
    pub entry: EntryData,
}

/// POST /entries - register a participant contact
pub async fn submit_entry_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SubmitEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let entry = submit_entry(
        &payload.contact,
        payload.display_name.as_deref(),
        &state.db_pool,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            success: true,
            entry: entry.into(),
        }),
    ))
}

#[derive(Serialize)]
pub struct RemoveEntryResponse {
    pub success: bool,
}

/// DELETE /entries/:id - remove one entry (admin)
pub async fn remove_entry_handler(
    admin: Option<Extension<AuthAdmin>>,
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RemoveEntryResponse>, AppError> {
    require_admin(admin)?;

    remove_entry(id, &state.db_pool).await?;

    Ok(Json(RemoveEntryResponse { success: true }))
}

#[derive(Serialize)]
pub struct ClearEntriesResponse {
    pub success: bool,
    pub removed: u64,
}

/// DELETE /entries - remove every entry (admin)
pub async fn clear_entries_handler(
    admin: Option<Extension<AuthAdmin>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<ClearEntriesResponse>, AppError> {
    require_admin(admin)?;

    let removed = clear_entries(&state.db_pool).await?;

    Ok(Json(ClearEntriesResponse {
        success: true,
        removed,
    }))
}
