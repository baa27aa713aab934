use axum::{extract::Extension, Json};

use crate::common::AppError;
use crate::domains::entries::actions::draw_winner;
use crate::server::app::AppState;
use crate::server::middleware::{require_admin, AuthAdmin};
use crate::server::routes::entries::EntryResponse;

/// POST /draw - flag one random non-winning entry as a winner (admin)
pub async fn draw_handler(
    admin: Option<Extension<AuthAdmin>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<EntryResponse>, AppError> {
    let admin = require_admin(admin)?;

    let winner = draw_winner(&state.db_pool).await?;

    tracing::info!(admin = %admin.username, contact = %winner.contact, "Draw executed");

    Ok(Json(EntryResponse {
        success: true,
        entry: winner.into(),
    }))
}
