use axum::{
    extract::Extension,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::AppError;
use crate::domains::auth::actions::{login, signup};
use crate::domains::auth::JwtService;
use crate::server::app::AppState;
use crate::server::middleware::admin_auth::ADMIN_TOKEN_COOKIE;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub access_code: Option<String>,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub username: String,
}

/// POST /admin/signup - create an admin account
pub async fn signup_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let account = signup(
        &payload.username,
        &payload.password,
        payload.access_code.as_deref(),
        state.admin_access_code.as_deref(),
        &state.db_pool,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            username: account.username,
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// POST /admin/login - authenticate and set the admin token cookie
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let token = login(
        &payload.username,
        &payload.password,
        &state.jwt_service,
        &state.db_pool,
    )
    .await?;

    let cookie = admin_cookie(&token, state.cookie_secure);

    let mut response = Json(LoginResponse { success: true }).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie).map_err(anyhow::Error::new)?,
    );

    Ok(response)
}

/// Session cookie: HTTP-only, strict same-site, expiring with the token.
fn admin_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        ADMIN_TOKEN_COOKIE,
        token,
        JwtService::TOKEN_TTL_SECONDS
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_attributes() {
        let cookie = admin_cookie("abc123", true);
        assert!(cookie.starts_with("admin_token=abc123; "));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_cookie_without_secure_flag() {
        let cookie = admin_cookie("abc123", false);
        assert!(!cookie.contains("Secure"));
    }
}
