use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error taxonomy.
///
/// Every handler failure is one of these; the `IntoResponse` impl maps each
/// variant to a status code and the JSON error envelope, so no failure
/// propagates to the client as an unhandled fault.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid mobile number format")]
    InvalidContact,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Mobile already registered")]
    DuplicateContact,

    #[error("Admin already exists")]
    DuplicateUsername,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("No eligible entries left")]
    EmptyPool,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid access code")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidContact | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateContact | AppError::DuplicateUsername => StatusCode::CONFLICT,
            AppError::EntryNotFound | AppError::EmptyPool => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal detail goes to the log, never to the client.
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

/// True when the error is a unique-index violation, which the data layer
/// maps to the duplicate variants.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
        .unwrap_or(false)
}
