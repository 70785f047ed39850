mod support;

use axum::http::StatusCode;
use serde_json::{json, Value};

use support::TestApp;

/// GET, PUT, DELETE, then GET again on one entity.
async fn lifecycle(app: &TestApp, uri: &str, patch: Value, field: &str) -> Value {
    let (status, before) = app.get(uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");

    let (status, updated) = app.put(uri, patch.clone()).await;
    assert_eq!(status, StatusCode::OK, "PUT {uri}");
    assert_eq!(updated[field], patch[field]);
    assert_eq!(updated["id"], before["id"]);
    assert_eq!(updated["created_at"], before["created_at"]);

    let (_, fetched) = app.get(uri).await;
    assert_eq!(fetched, updated);

    let (status, body) = app.delete(uri).await;
    assert_eq!(status, StatusCode::OK, "DELETE {uri}");
    assert_eq!(body, json!({}));
    assert_eq!(app.get(uri).await.0, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(uri).await.0, StatusCode::NOT_FOUND);
    updated
}

#[tokio::test]
async fn amenity_by_id() {
    let app = TestApp::new();
    let id = app.create("/api/v1/amenities", json!({"name": "Wifi"})).await;
    lifecycle(&app, &format!("/api/v1/amenities/{id}"), json!({"name": "Fast wifi"}), "name").await;
}

#[tokio::test]
async fn city_by_id() {
    let app = TestApp::new();
    let state = app.create("/api/v1/states", json!({"name": "Oregon"})).await;
    let id = app
        .create(&format!("/api/v1/states/{state}/cities"), json!({"name": "Portland"}))
        .await;
    let updated = lifecycle(&app, &format!("/api/v1/cities/{id}"), json!({"name": "Salem"}), "name").await;
    assert_eq!(updated["state_id"], state.as_str());
}

#[tokio::test]
async fn place_by_id() {
    let app = TestApp::new();
    let state = app.create("/api/v1/states", json!({"name": "Oregon"})).await;
    let city = app
        .create(&format!("/api/v1/states/{state}/cities"), json!({"name": "Portland"}))
        .await;
    let user = app.user().await;
    let id = app
        .create(
            &format!("/api/v1/cities/{city}/places"),
            json!({"user_id": user, "name": "Cabin", "description": "Woods", "latitude": 45.5}),
        )
        .await;
    let uri = format!("/api/v1/places/{id}");

    let (status, cleared) = app
        .put(&uri, json!({"description": null, "latitude": null, "number_rooms": -1}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["description"], Value::Null);
    assert_eq!(cleared["latitude"], Value::Null);
    assert_eq!(cleared["number_rooms"], -1);

    lifecycle(&app, &uri, json!({"name": "Treehouse"}), "name").await;
}

#[tokio::test]
async fn review_by_id_keeps_its_owner_and_place() {
    let app = TestApp::new();
    let state = app.create("/api/v1/states", json!({"name": "Oregon"})).await;
    let city = app
        .create(&format!("/api/v1/states/{state}/cities"), json!({"name": "Portland"}))
        .await;
    let user = app.user().await;
    let place = app
        .create(&format!("/api/v1/cities/{city}/places"), json!({"user_id": user, "name": "Cabin"}))
        .await;
    let other_place = app
        .create(&format!("/api/v1/cities/{city}/places"), json!({"user_id": user, "name": "Loft"}))
        .await;
    let id = app
        .create(&format!("/api/v1/places/{place}/reviews"), json!({"user_id": user, "text": "Cozy"}))
        .await;
    let uri = format!("/api/v1/reviews/{id}");

    let (status, updated) = app
        .put(
            &uri,
            json!({"user_id": "6f1c1c4e-3f7b-4a1e-9a0b-2f4b8f5d9c11", "place_id": other_place, "text": "Cold"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["text"], "Cold");
    assert_eq!(updated["user_id"], user.as_str());
    assert_eq!(updated["place_id"], place.as_str());

    lifecycle(&app, &uri, json!({"text": "Warm"}), "text").await;
}

#[tokio::test]
async fn places_search_treats_null_as_no_filter() {
    let app = TestApp::new();
    let state = app.create("/api/v1/states", json!({"name": "Oregon"})).await;
    let city = app
        .create(&format!("/api/v1/states/{state}/cities"), json!({"name": "Portland"}))
        .await;
    let user = app.user().await;
    app.create(&format!("/api/v1/cities/{city}/places"), json!({"user_id": user, "name": "Cabin"}))
        .await;

    let (status, found) = app
        .post("/api/v1/places_search", json!({"states": null, "cities": null, "amenities": null}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().map(Vec::len), Some(1));
}
