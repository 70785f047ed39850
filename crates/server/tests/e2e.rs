use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::routes::{self, AppRequest};
use server::AppState;
use service::storage::MapEngine;
use service::SharedEngine;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

async fn start_server(storage: SharedEngine) -> anyhow::Result<TestApp> {
    let app = routes::build_app(AppState::new(storage), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}/api/v1", addr.ip(), addr.port());

    tokio::spawn(async move {
        let make = axum::ServiceExt::<AppRequest>::into_make_service(app);
        if let Err(e) = axum::serve(listener, make).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn temp_store() -> PathBuf {
    std::env::temp_dir()
        .join(format!("hbnb_e2e_{}", Uuid::new_v4()))
        .join("file.json")
}

#[tokio::test]
async fn e2e_status() -> anyhow::Result<()> {
    let app = start_server(Arc::new(MapEngine::memory())).await?;
    let res = reqwest::get(format!("{}/status", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "OK");
    Ok(())
}

#[tokio::test]
async fn e2e_state_create_get_delete() -> anyhow::Result<()> {
    let app = start_server(Arc::new(MapEngine::memory())).await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/states", app.base_url))
        .json(&json!({"name": "California"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let state = res.json::<Value>().await?;
    let id = state["id"].as_str().unwrap_or_default().to_string();
    assert!(Uuid::parse_str(&id).is_ok());

    let res = c.get(format!("{}/states/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["name"], "California");

    let res = c.delete(format!("{}/states/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({}));

    let res = c.get(format!("{}/states/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_plain_text_body_is_rejected() -> anyhow::Result<()> {
    let app = start_server(Arc::new(MapEngine::memory())).await?;
    let res = reqwest::Client::new()
        .post(format!("{}/amenities", app.base_url))
        .header("content-type", "text/plain")
        .body("name=Wifi")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Not a JSON");
    Ok(())
}

#[tokio::test]
async fn e2e_file_storage_survives_restart() -> anyhow::Result<()> {
    let path = temp_store();

    let first = start_server(Arc::new(MapEngine::file(&path).await?)).await?;
    let res = reqwest::Client::new()
        .post(format!("{}/amenities", first.base_url))
        .json(&json!({"name": "Wifi"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let id = res.json::<Value>().await?["id"].clone();

    let second = start_server(Arc::new(MapEngine::file(&path).await?)).await?;
    let list = reqwest::get(format!("{}/amenities", second.base_url))
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], id);

    if let Some(dir) = path.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
    Ok(())
}
