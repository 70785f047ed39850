mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::TestApp;

#[tokio::test]
async fn password_is_never_returned() {
    let app = TestApp::new();
    let (status, created) = app
        .post(
            "/api/v1/users",
            json!({"email": "a@b.io", "password": "hunter2", "first_name": "Ada"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "a@b.io");
    assert_eq!(created["first_name"], "Ada");
    assert_eq!(created["__class__"], "User");
    assert!(created.get("password").is_none());

    let (_, list) = app.get("/api/v1/users").await;
    assert!(list[0].get("password").is_none());
}

#[tokio::test]
async fn email_then_password_are_mandatory() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/v1/users", json!({"password": "pw"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing email");

    let (status, body) = app.post("/api/v1/users", json!({"email": "a@b.io"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing password");
}

#[tokio::test]
async fn update_keeps_email() {
    let app = TestApp::new();
    let id = app.user().await;
    let (status, updated) = app
        .put(
            &format!("/api/v1/users/{id}"),
            json!({"email": "other@example.com", "last_name": "Lovelace", "password": "new"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "guest@example.com");
    assert_eq!(updated["last_name"], "Lovelace");
    assert!(updated.get("password").is_none());
}
