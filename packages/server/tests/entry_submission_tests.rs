//! Entry registration and admin entry management over HTTP.

mod common;

use serde_json::{json, Value};

use crate::common::fixtures::{admin_cookie, admin_token, submit};
use crate::common::TestApp;

async fn entry_count(app: &TestApp) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM entries")
        .fetch_one(&app.db_pool)
        .await
        .expect("count query failed")
}

#[tokio::test]
async fn test_valid_submission_creates_entry() {
    let app = TestApp::spawn().await.unwrap();

    let response = submit(&app, "9876543210").await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["entry"]["contact"], "9876543210");
    assert_eq!(body["entry"]["isWinner"], false);

    assert_eq!(entry_count(&app).await, 1);
}

#[tokio::test]
async fn test_duplicate_submission_conflicts() {
    let app = TestApp::spawn().await.unwrap();

    assert_eq!(submit(&app, "9876543210").await.status(), 201);

    let response = submit(&app, "9876543210").await;
    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Mobile already registered");

    // Exactly one stored entry
    assert_eq!(entry_count(&app).await, 1);
}

#[tokio::test]
async fn test_formatting_variants_are_the_same_entry() {
    let app = TestApp::spawn().await.unwrap();

    assert_eq!(submit(&app, "98765 43210").await.status(), 201);
    assert_eq!(submit(&app, "987-654-3210").await.status(), 409);
    assert_eq!(submit(&app, "  9876543210  ").await.status(), 409);

    assert_eq!(entry_count(&app).await, 1);
}

#[tokio::test]
async fn test_display_name_is_stored() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .client
        .post(app.url("/entries"))
        .json(&json!({ "contact": "9876543210", "displayName": "Asha" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["entry"]["displayName"], "Asha");
}

#[tokio::test]
async fn test_malformed_contacts_never_reach_store() {
    let app = TestApp::spawn().await.unwrap();

    for bad in ["abc", "123", "98765abc43", "", "+", "1234567890123456"] {
        let response = submit(&app, bad).await;
        assert_eq!(response.status(), 400, "contact {:?} should be rejected", bad);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
    }

    assert_eq!(entry_count(&app).await, 0);
}

#[tokio::test]
async fn test_remove_entry_requires_admin() {
    let app = TestApp::spawn().await.unwrap();

    let response = submit(&app, "9876543210").await;
    let body: Value = response.json().await.unwrap();
    let id = body["entry"]["id"].as_str().unwrap().to_string();

    let response = app
        .client
        .delete(app.url(&format!("/entries/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    assert_eq!(entry_count(&app).await, 1);
}

#[tokio::test]
async fn test_remove_entry_deletes_row() {
    let app = TestApp::spawn().await.unwrap();
    let token = admin_token(&app, "ops").await;

    let response = submit(&app, "9876543210").await;
    let body: Value = response.json().await.unwrap();
    let id = body["entry"]["id"].as_str().unwrap().to_string();

    let response = app
        .client
        .delete(app.url(&format!("/entries/{}", id)))
        .header("cookie", admin_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(entry_count(&app).await, 0);

    // Removing it again is a 404
    let response = app
        .client
        .delete(app.url(&format!("/entries/{}", id)))
        .header("cookie", admin_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_clear_entries_reports_count() {
    let app = TestApp::spawn().await.unwrap();
    let token = admin_token(&app, "ops").await;

    for contact in ["9876543210", "9876543211", "9876543212"] {
        assert_eq!(submit(&app, contact).await.status(), 201);
    }

    let response = app
        .client
        .delete(app.url("/entries"))
        .header("cookie", admin_cookie(&token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["removed"], 3);
    assert_eq!(entry_count(&app).await, 0);
}
