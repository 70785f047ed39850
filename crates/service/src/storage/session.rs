use std::collections::HashMap;
use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use models::{Entity, Record};
use tracing::debug;
use uuid::Uuid;

use super::{Change, SharedEngine};
use crate::errors::ServiceError;

/// Request-scoped unit of work over a shared engine.
///
/// Writes are staged with [`Session::add`] and [`Session::delete`] and reach
/// the engine only on [`Session::save`]. Reads see staged changes. Whatever is
/// still staged when the session is closed or dropped is discarded, so a
/// request that fails halfway leaves storage as it found it.
pub struct Session {
    engine: SharedEngine,
    staged: Vec<Change>,
}

impl Session {
    pub fn open(engine: SharedEngine) -> Self {
        Self { engine, staged: Vec::new() }
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Every entity of type `T`.
    pub async fn all<T: Entity>(&self) -> Result<Vec<T>, ServiceError> {
        let stored = self.engine.all(Some(T::KIND)).await?;
        let mut by_id: HashMap<Uuid, Record> = stored.into_iter().map(|r| (r.id(), r)).collect();
        for change in self.staged.iter().filter(|c| c.kind() == T::KIND) {
            let current = by_id.remove(&change.id());
            if let Ok(Some(next)) = change.apply_to(current) {
                by_id.insert(next.id(), next);
            }
        }
        Ok(by_id.into_values().filter_map(T::from_record).collect())
    }

    pub async fn get<T: Entity>(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        let mut current = self.engine.get(T::KIND, id).await?;
        for change in self.staged.iter().filter(|c| c.kind() == T::KIND && c.id() == id) {
            current = change.apply_to(current).unwrap_or(None);
        }
        Ok(current.and_then(T::from_record))
    }

    /// Stage a new entity. Existing entities change through
    /// [`Session::update`] so that a concurrent delete is not undone.
    pub fn add<T: Entity>(&mut self, entity: T) {
        self.staged.push(Change::Put(entity.into_record()));
    }

    /// Stage assignment of `patch` on whatever entity `id` is at commit time.
    pub fn update<T: Entity>(&mut self, id: Uuid, patch: T::Patch) {
        self.staged.push(Change::Update { id, patch: T::wrap_patch(patch) });
    }

    pub fn link_amenity(&mut self, place_id: Uuid, amenity_id: Uuid) {
        self.staged.push(Change::LinkAmenity { place_id, amenity_id });
    }

    pub fn unlink_amenity(&mut self, place_id: Uuid, amenity_id: Uuid) {
        self.staged.push(Change::UnlinkAmenity { place_id, amenity_id });
    }

    /// Stage removal of an entity.
    pub fn delete<T: Entity>(&mut self, entity: &T) {
        self.staged.push(Change::Remove { kind: T::KIND, id: entity.id() });
    }

    /// Commit every staged change to the engine. The staging area is empty
    /// afterwards whether or not the commit succeeded.
    pub async fn save(&mut self) -> Result<(), ServiceError> {
        if self.staged.is_empty() {
            return Ok(());
        }
        let changes = std::mem::take(&mut self.staged);
        self.engine.commit(changes).await
    }

    pub fn pending(&self) -> usize {
        self.staged.len()
    }

    /// Release the session, discarding anything not saved.
    pub fn close(self) {}
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.staged.is_empty() {
            debug!(discarded = self.staged.len(), "session closed with unsaved changes");
        }
    }
}

/// Every handler that takes a `Session` gets a fresh one per request.
#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    SharedEngine: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::open(SharedEngine::from_ref(state)))
    }
}
