mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::TestApp;

#[tokio::test]
async fn status_is_ok() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn stats_count_every_collection() {
    let app = TestApp::new();
    let state = app.create("/api/v1/states", json!({"name": "Oregon"})).await;
    app.create(&format!("/api/v1/states/{state}/cities"), json!({"name": "Portland"})).await;
    app.create("/api/v1/amenities", json!({"name": "Wifi"})).await;
    app.create("/api/v1/amenities", json!({"name": "Pool"})).await;

    let (status, body) = app.get("/api/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"amenities": 2, "cities": 1, "places": 0, "reviews": 0, "states": 1, "users": 0})
    );
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new();
    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/status"].is_object());
}
