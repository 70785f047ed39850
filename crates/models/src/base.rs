use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{Record, RecordPatch};

/// The six entity types the storage layer knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Amenity,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::Review,
        EntityKind::State,
        EntityKind::User,
    ];

    /// Class name, also the `__class__` tag of serialized records.
    pub fn class_name(self) -> &'static str {
        match self {
            EntityKind::Amenity => "Amenity",
            EntityKind::City => "City",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
            EntityKind::State => "State",
            EntityKind::User => "User",
        }
    }

    /// Plural name used in URLs and in `/stats`.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Amenity => "amenities",
            EntityKind::City => "cities",
            EntityKind::Place => "places",
            EntityKind::Review => "reviews",
            EntityKind::State => "states",
            EntityKind::User => "users",
        }
    }

    /// Storage key of an entity of this kind: `<Class>.<id>`.
    pub fn key(self, id: Uuid) -> String {
        format!("{}.{}", self.class_name(), id)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// System-managed fields, fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meta {
    pub fn new() -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), created_at: now, updated_at: now }
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}

/// A record the storage layer can hold.
pub trait Entity: Clone + Send + Sync + Sized + 'static {
    const KIND: EntityKind;

    /// Allow-listed fields a `PUT` may overwrite. Anything else in the body is
    /// dropped during deserialization.
    type Patch: DeserializeOwned + Clone + std::fmt::Debug + Send + Sync;

    fn meta(&self) -> &Meta;

    fn apply(&mut self, patch: Self::Patch);

    fn into_record(self) -> Record;

    /// Type-erased patch, applied by storage to whatever record is current.
    fn wrap_patch(patch: Self::Patch) -> RecordPatch;

    fn from_record(record: Record) -> Option<Self>;

    fn id(&self) -> Uuid {
        self.meta().id
    }

    fn key(&self) -> String {
        Self::KIND.key(self.id())
    }
}

/// An entity created from a request body.
pub trait Creatable: Entity {
    /// Fields that must be present in the body, checked in this order.
    const REQUIRED: &'static [&'static str];

    /// Allow-listed, typed create input.
    type Draft: DeserializeOwned + Send;
}
