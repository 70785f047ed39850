//! Storage abstractions for the service layer.
//!
//! A [`StorageEngine`] owns persistence and is shared by the whole process.
//! Route handlers never touch it directly: each request opens a [`Session`],
//! stages changes on it and saves them, and the session is released when the
//! request ends.

use std::sync::Arc;

use async_trait::async_trait;
use models::{EntityKind, Record, RecordPatch};
use uuid::Uuid;

use crate::errors::ServiceError;

pub mod json_map_store;
pub mod map_engine;
pub mod session;

pub use map_engine::MapEngine;
pub use session::Session;

/// One staged write.
///
/// Only `Put` is unconditional. The other changes act on whatever record is
/// current when the engine applies them, and fail with `NotFound` if it is
/// gone, so a stale reader can neither resurrect a deleted record nor
/// overwrite fields it did not touch.
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Insert, or replace the record with the same key.
    Put(Record),
    /// Assign the patch's fields on the current record.
    Update { id: Uuid, patch: RecordPatch },
    LinkAmenity { place_id: Uuid, amenity_id: Uuid },
    UnlinkAmenity { place_id: Uuid, amenity_id: Uuid },
    Remove { kind: EntityKind, id: Uuid },
}

impl Change {
    pub fn kind(&self) -> EntityKind {
        match self {
            Change::Put(record) => record.kind(),
            Change::Update { patch, .. } => patch.kind(),
            Change::LinkAmenity { .. } | Change::UnlinkAmenity { .. } => EntityKind::Place,
            Change::Remove { kind, .. } => *kind,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Change::Put(record) => record.id(),
            Change::Update { id, .. } | Change::Remove { id, .. } => *id,
            Change::LinkAmenity { place_id, .. } | Change::UnlinkAmenity { place_id, .. } => *place_id,
        }
    }

    pub fn key(&self) -> String {
        self.kind().key(self.id())
    }

    /// The record stored under [`Change::key`] after this change, given the
    /// one stored before it.
    pub fn apply_to(&self, current: Option<Record>) -> Result<Option<Record>, ServiceError> {
        let missing = || ServiceError::not_found(self.kind().class_name());
        match self {
            Change::Put(record) => Ok(Some(record.clone())),
            Change::Remove { .. } => current.map(|_| None).ok_or_else(missing),
            Change::Update { patch, .. } => {
                let mut record = current.ok_or_else(missing)?;
                record.apply(patch.clone())?;
                Ok(Some(record))
            }
            Change::LinkAmenity { amenity_id, .. } => match current {
                Some(Record::Place(mut place)) => {
                    place.link_amenity(*amenity_id);
                    Ok(Some(Record::Place(place)))
                }
                _ => Err(missing()),
            },
            Change::UnlinkAmenity { amenity_id, .. } => match current {
                Some(Record::Place(mut place)) => {
                    if !place.unlink_amenity(*amenity_id) {
                        return Err(ServiceError::NotFound("amenity not linked to place".into()));
                    }
                    Ok(Some(Record::Place(place)))
                }
                _ => Err(missing()),
            },
        }
    }
}

/// Persistence backend.
///
/// Implementations serialise `commit` calls and apply each batch as a whole.
#[async_trait]
pub trait StorageEngine: Send + Sync {
    /// Every record, or every record of one kind.
    async fn all(&self, kind: Option<EntityKind>) -> Result<Vec<Record>, ServiceError>;

    async fn get(&self, kind: EntityKind, id: Uuid) -> Result<Option<Record>, ServiceError>;

    /// Apply staged changes in order and persist them. If any change fails
    /// the whole batch is discarded.
    async fn commit(&self, changes: Vec<Change>) -> Result<(), ServiceError>;

    async fn count(&self, kind: Option<EntityKind>) -> Result<usize, ServiceError> {
        Ok(self.all(kind).await?.len())
    }

    /// Short engine name for logs.
    fn name(&self) -> &'static str;
}

pub type SharedEngine = Arc<dyn StorageEngine>;

/// Build the engine selected by configuration.
pub async fn open(cfg: &configs::StorageConfig) -> Result<SharedEngine, ServiceError> {
    let engine: SharedEngine = match cfg.engine {
        configs::StorageKind::Memory => Arc::new(MapEngine::memory()),
        configs::StorageKind::File => Arc::new(MapEngine::file(&cfg.path).await?),
    };
    tracing::info!(engine = engine.name(), "storage engine ready");
    Ok(engine)
}
