//! Shared request helpers for the HTTP test suite.

use reqwest::header::SET_COOKIE;
use serde_json::json;

use super::TestApp;

/// Register a contact, returning the raw response.
pub async fn submit(app: &TestApp, contact: &str) -> reqwest::Response {
    app.client
        .post(app.url("/entries"))
        .json(&json!({ "contact": contact }))
        .send()
        .await
        .expect("submit request failed")
}

/// Create an admin account and log in, returning the token from the
/// Set-Cookie header.
pub async fn admin_token(app: &TestApp, username: &str) -> String {
    let response = app
        .client
        .post(app.url("/admin/signup"))
        .json(&json!({ "username": username, "password": "correct horse battery" }))
        .send()
        .await
        .expect("signup request failed");
    assert_eq!(response.status(), 201, "admin signup should succeed");

    let response = app
        .client
        .post(app.url("/admin/login"))
        .json(&json!({ "username": username, "password": "correct horse battery" }))
        .send()
        .await
        .expect("login request failed");
    assert_eq!(response.status(), 200, "admin login should succeed");

    token_from_set_cookie(&response)
}

/// Pull the admin token out of a login response's Set-Cookie header.
pub fn token_from_set_cookie(response: &reqwest::Response) -> String {
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login response should set a cookie")
        .to_str()
        .expect("cookie should be valid UTF-8");

    cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("admin_token="))
        .expect("cookie should carry admin_token")
        .to_string()
}

/// Cookie header value for an admin token.
pub fn admin_cookie(token: &str) -> String {
    format!("admin_token={}", token)
}
