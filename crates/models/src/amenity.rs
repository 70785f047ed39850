use serde::{Deserialize, Serialize};

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl Amenity {
    pub fn new(draft: NewAmenity) -> Self {
        Self { meta: Meta::new(), name: draft.name }
    }
}

impl Entity for Amenity {
    const KIND: EntityKind = EntityKind::Amenity;
    type Patch = AmenityPatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn into_record(self) -> Record {
        Record::Amenity(self)
    }

    fn wrap_patch(patch: AmenityPatch) -> RecordPatch {
        RecordPatch::Amenity(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Amenity(a) => Some(a),
            _ => None,
        }
    }
}

impl Creatable for Amenity {
    const REQUIRED: &'static [&'static str] = &["name"];
    type Draft = NewAmenity;
}
