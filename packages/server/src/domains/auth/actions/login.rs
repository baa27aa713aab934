use sqlx::PgPool;

use crate::common::AppError;
use crate::domains::auth::models::AdminAccount;
use crate::domains::auth::password::{hash_password, verify_password};
use crate::domains::auth::JwtService;

/// Authenticate an admin and issue a token.
///
/// Unknown-user and wrong-password both return the same `InvalidCredentials`
/// error, and the unknown-user path still burns one bcrypt round so the two
/// cannot be told apart by timing.
pub async fn login(
    username: &str,
    password: &str,
    jwt: &JwtService,
    pool: &PgPool,
) -> Result<String, AppError> {
    let account = match AdminAccount::find_by_username(username.trim(), pool).await? {
        Some(account) => account,
        None => {
            let _ = hash_password(password);
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(password, &account.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt.create_token(account.id, account.username.clone())?;

    tracing::info!(username = %account.username, "Admin logged in");
    Ok(token)
}
