use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::AppError;
use crate::domains::entries::actions::{list_winners, mark_winner};
use crate::domains::entries::WINNERS_PAGE_SIZE;
use crate::server::app::AppState;
use crate::server::middleware::{require_admin, AuthAdmin};
use crate::server::routes::entries::EntryResponse;

#[derive(Serialize)]
pub struct WinnersResponse {
    pub success: bool,
    pub winners: Vec<String>,
}

/// GET /winners - the public winners list, most recent first
pub async fn list_winners_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<WinnersResponse>, AppError> {
    let winners = list_winners(WINNERS_PAGE_SIZE, &state.db_pool)
        .await?
        .into_iter()
        .map(|e| e.contact)
        .collect();

    Ok(Json(WinnersResponse {
        success: true,
        winners,
    }))
}

#[derive(Deserialize)]
pub struct MarkWinnerRequest {
    pub contact: String,
}

/// POST /winners - flag a registered entry as a winner directly (admin)
pub async fn mark_winner_handler(
    admin: Option<Extension<AuthAdmin>>,
    Extension(state): Extension<AppState>,
    Json(payload): Json<MarkWinnerRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    require_admin(admin)?;

    let entry = mark_winner(&payload.contact, &state.db_pool).await?;

    Ok(Json(EntryResponse {
        success: true,
        entry: entry.into(),
    }))
}
