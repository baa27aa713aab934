use axum::{extract::Extension, http::header, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::common::AppError;
use crate::domains::auth::JwtService;

/// Cookie carrying the admin token.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Authenticated admin identity from a verified token
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub admin_id: Uuid,
    pub username: String,
}

/// Admin authentication middleware
///
/// Extracts the token from the `admin_token` cookie (or an Authorization
/// header as a fallback), verifies it, and adds AuthAdmin to request
/// extensions. Requests without a valid token continue unauthenticated;
/// admin-only handlers reject them via [`require_admin`].
pub async fn admin_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(admin) = extract_auth_admin(&request, &jwt_service) {
        debug!("Authenticated admin: {}", admin.username);
        request.extensions_mut().insert(admin);
    } else {
        debug!("No valid admin token");
    }

    next.run(request).await
}

/// Reject requests that did not carry a valid admin token.
pub fn require_admin(admin: Option<Extension<AuthAdmin>>) -> Result<AuthAdmin, AppError> {
    admin.map(|Extension(a)| a).ok_or(AppError::Unauthorized)
}

/// Extract and verify the admin token from a request
fn extract_auth_admin(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthAdmin> {
    let token = token_from_cookie(request).or_else(|| token_from_auth_header(request))?;

    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthAdmin {
        admin_id: claims.admin_id,
        username: claims.username,
    })
}

fn token_from_cookie<'a>(request: &'a axum::http::Request<axum::body::Body>) -> Option<&'a str> {
    let cookies = request.headers().get(header::COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(ADMIN_TOKEN_COOKIE)?.strip_prefix('='))
}

fn token_from_auth_header<'a>(
    request: &'a axum::http::Request<axum::body::Body>,
) -> Option<&'a str> {
    let auth_str = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
