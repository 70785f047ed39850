use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use models::{EntityKind, Record};
use tracing::debug;
use uuid::Uuid;

use super::json_map_store::JsonMapStore;
use super::{Change, StorageEngine};
use crate::errors::ServiceError;

/// Engine keeping every record in one map keyed `<Class>.<id>`.
///
/// `MapEngine::memory()` keeps nothing across restarts; `MapEngine::file()`
/// mirrors the map into a JSON object on disk after every commit.
pub struct MapEngine {
    store: Arc<JsonMapStore<String, Record>>,
}

impl MapEngine {
    pub fn memory() -> Self {
        Self { store: JsonMapStore::in_memory() }
    }

    pub async fn file<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self { store: JsonMapStore::open(path).await? })
    }
}

#[async_trait]
impl StorageEngine for MapEngine {
    async fn all(&self, kind: Option<EntityKind>) -> Result<Vec<Record>, ServiceError> {
        Ok(match kind {
            Some(kind) => self.store.values_where(|r| r.kind() == kind).await,
            None => self.store.values().await,
        })
    }

    async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Option<Record>, ServiceError> {
        Ok(self.store.get(&kind.key(id)).await)
    }

    async fn commit(&self, changes: Vec<Change>) -> Result<(), ServiceError> {
        let n = changes.len();
        self.store
            .update_map(|map| {
                for change in &changes {
                    let key = change.key();
                    let current = map.remove(&key);
                    if let Some(next) = change.apply_to(current)? {
                        map.insert(key, next);
                    }
                }
                Ok(())
            })
            .await?;
        debug!(engine = self.name(), changes = n, "committed");
        Ok(())
    }

    async fn count(&self, kind: Option<EntityKind>) -> Result<usize, ServiceError> {
        Ok(match kind {
            Some(kind) => self.store.count_where(|r| r.kind() == kind).await,
            None => self.store.count_where(|_| true).await,
        })
    }

    fn name(&self) -> &'static str {
        if self.store.file_path().is_some() { "file" } else { "memory" }
    }
}
