#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server::{routes, AppState};
use service::storage::MapEngine;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;

pub struct TestApp {
    app: NormalizePath<Router>,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(MapEngine::memory()));
        Self { app: routes::build_app(state, CorsLayer::very_permissive()) }
    }

    /// Send a request with a raw body and decode the JSON response.
    pub async fn raw(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let body = match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        };
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("request");
        let res = self.app.clone().oneshot(req).await.expect("infallible");
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json response")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.raw(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.raw(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.raw(Method::POST, uri, Some(&body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.raw(Method::PUT, uri, Some(&body.to_string())).await
    }

    /// POST that must succeed; returns the new id.
    pub async fn create(&self, uri: &str, body: Value) -> String {
        let (status, json) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {uri}: {json}");
        json["id"].as_str().expect("id").to_string()
    }

    pub async fn user(&self) -> String {
        self.create(
            "/api/v1/users",
            serde_json::json!({"email": "guest@example.com", "password": "pw"}),
        )
        .await
    }
}
