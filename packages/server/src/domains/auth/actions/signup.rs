use sqlx::PgPool;

use crate::common::error::is_unique_violation;
use crate::common::AppError;
use crate::domains::auth::models::AdminAccount;
use crate::domains::auth::password::hash_password;

/// Create an admin account.
///
/// When an access code is configured, signup without the matching code is
/// forbidden. The unique index on `username` is the duplicate check.
pub async fn signup(
    username: &str,
    password: &str,
    access_code: Option<&str>,
    configured_code: Option<&str>,
    pool: &PgPool,
) -> Result<AdminAccount, AppError> {
    if let Some(required) = configured_code {
        if access_code != Some(required) {
            return Err(AppError::Forbidden);
        }
    }

    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::InvalidInput("Username is required".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::InvalidInput("Password is required".to_string()));
    }

    let password_hash = hash_password(password)?;

    match AdminAccount::create(username, &password_hash, pool).await {
        Ok(account) => {
            tracing::info!(username = %account.username, "Admin account created");
            Ok(account)
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateUsername),
        Err(e) => Err(e.into()),
    }
}
