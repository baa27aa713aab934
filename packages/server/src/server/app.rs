//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::server::middleware::admin_auth_middleware;
use crate::server::routes::{
    clear_entries_handler, draw_handler, health_handler, list_winners_handler, login_handler,
    mark_winner_handler, remove_entry_handler, signup_handler, submit_entry_handler,
    verify_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: Arc<JwtService>,
    pub admin_access_code: Option<String>,
    pub cookie_secure: bool,
}

/// Build the Axum application router
///
/// Middleware layers apply in reverse order - last added runs first. Auth
/// extraction never blocks a request; admin-only handlers enforce it.
pub fn build_app(
    pool: PgPool,
    jwt_secret: &str,
    jwt_issuer: String,
    admin_access_code: Option<String>,
    cookie_secure: bool,
) -> Router {
    let jwt_service = Arc::new(JwtService::new(jwt_secret, jwt_issuer));

    let app_state = AppState {
        db_pool: pool,
        jwt_service: jwt_service.clone(),
        admin_access_code,
        cookie_secure,
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: per-IP, generous enough for a browser clicking around,
    // tight enough to blunt contact-list scraping through /verify.
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(50)
            .burst_size(100)
            .use_headers()
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    Router::new()
        .route(
            "/entries",
            post(submit_entry_handler).delete(clear_entries_handler),
        )
        .route("/entries/:id", delete(remove_entry_handler))
        .route("/draw", post(draw_handler))
        .route("/verify", post(verify_handler))
        .route(
            "/winners",
            get(list_winners_handler).post(mark_winner_handler),
        )
        .route("/admin/signup", post(signup_handler))
        .route("/admin/login", post(login_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            admin_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(rate_limit_layer)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
