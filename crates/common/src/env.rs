//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before any storage engine is opened.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the directory holding the storage file exists.
pub async fn ensure_data_dir(file_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_ok() {
        return Ok(());
    }
    warn!(dir = %parent.display(), "data directory missing; creating it");
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "data directory created");
    Ok(())
}
