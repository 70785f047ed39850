use std::{future::Future, net::SocketAddr};

use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppRequest};
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: load config, open storage, serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load()?;
    serve(cfg, shutdown_signal()).await
}

/// Serve with an explicit config until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if cfg.storage.engine == configs::StorageKind::File {
        service::runtime::ensure_env(&cfg.storage.path).await?;
    }
    let storage = service::storage::open(&cfg.storage).await?;
    let app = routes::build_app(AppState::new(storage), build_cors());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, engine = ?cfg.storage.engine, "hbnb api listening");
    axum::serve(listener, axum::ServiceExt::<AppRequest>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
