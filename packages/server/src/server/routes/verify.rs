use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::common::AppError;
use crate::domains::entries::actions::{check_contact, CheckOutcome};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub contact: String,
}

/// POST /verify - report winner/not-winner for a contact
///
/// Open to everyone; the not-winner response carries the public winners
/// list.
pub async fn verify_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<CheckOutcome>, AppError> {
    let outcome = check_contact(&payload.contact, &state.db_pool).await?;

    Ok(Json(outcome))
}
