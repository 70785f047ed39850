use std::{collections::HashMap, hash::Hash, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;

/// Generic key-value map store, optionally persisted as one JSON file.
///
/// Without a file the map lives only in memory. With one, every mutation
/// rewrites the whole file (written to a sibling `.tmp` file, then renamed).
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: Option<PathBuf>,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// A store with no backing file.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(HashMap::new()), file_path: None })
    }

    /// Initialize the store from a path. Creates the file with an empty map if
    /// missing; fails if the file exists but is not a JSON map.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("{} is not a valid store: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(ServiceError::storage)?)
                    .await
                    .map_err(ServiceError::storage)?;
                empty
            }
            Err(e) => return Err(ServiceError::storage(e)),
        };
        debug!(path = %file_path.display(), entries = map.len(), "json map store loaded");

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path: Some(file_path) }))
    }

    async fn persist(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };
        let data = serde_json::to_vec(map).map_err(ServiceError::storage)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data).await.map_err(ServiceError::storage)?;
        fs::rename(&tmp, path).await.map_err(ServiceError::storage)?;
        Ok(())
    }

    /// List all values.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Values matching a predicate.
    pub async fn values_where<F>(&self, f: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|v| f(v)).cloned().collect()
    }

    /// Count values matching a predicate.
    pub async fn count_where<F>(&self, f: F) -> usize
    where
        F: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|v| f(v)).count()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Apply a mutation to the underlying map and persist under the write lock.
    /// On any failure the map is rolled back to its previous contents.
    pub async fn update_map<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<(), ServiceError>,
    {
        let mut map = self.inner.write().await;
        let snapshot = map.clone();
        let result = match f(&mut map) {
            Ok(()) => self.persist(&map).await,
            Err(e) => Err(e),
        };
        if result.is_err() {
            *map = snapshot;
        }
        result
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn json_map_store_persists_and_reloads() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()));
        let store = JsonMapStore::<String, String>::open(&tmp).await?;

        // initially empty
        assert_eq!(store.values().await.len(), 0);

        store
            .update_map(|m| {
                m.insert("a".into(), "1".into());
                m.insert("b".into(), "2".into());
                Ok(())
            })
            .await?;
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("1"));

        store
            .update_map(|m| {
                m.remove("b");
                Ok(())
            })
            .await?;

        let reloaded = JsonMapStore::<String, String>::open(&tmp).await?;
        assert_eq!(reloaded.values().await, vec!["1".to_string()]);
        assert_eq!(reloaded.count_where(|v| v == "1").await, 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_leaves_map_untouched() -> Result<(), anyhow::Error> {
        let store = JsonMapStore::<String, String>::in_memory();
        let res = store
            .update_map(|_| Err(ServiceError::Validation("nope".into())))
            .await;
        assert!(res.is_err());
        assert!(store.values().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_map_store_bad_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"[not a map").await?;
        assert!(JsonMapStore::<String, String>::open(&tmp).await.is_err());
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
