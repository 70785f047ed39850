//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can prepare the
//! storage location without depending directly on `common`.

use std::path::Path;

/// Ensure the directory of the storage file exists.
pub async fn ensure_env(storage_path: &str) -> anyhow::Result<()> {
    common::env::ensure_data_dir(Path::new(storage_path)).await
}
