use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub meta: Meta,
    pub state_id: Uuid,
    pub name: String,
}

/// `state_id` comes from the URL, never from the body.
#[derive(Debug, Deserialize)]
pub struct NewCity {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CityPatch {
    pub name: Option<String>,
}

impl City {
    pub fn new(state_id: Uuid, draft: NewCity) -> Self {
        Self { meta: Meta::new(), state_id, name: draft.name }
    }
}

impl Entity for City {
    const KIND: EntityKind = EntityKind::City;
    type Patch = CityPatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn apply(&mut self, patch: CityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn into_record(self) -> Record {
        Record::City(self)
    }

    fn wrap_patch(patch: CityPatch) -> RecordPatch {
        RecordPatch::City(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::City(c) => Some(c),
            _ => None,
        }
    }
}

impl Creatable for City {
    const REQUIRED: &'static [&'static str] = &["name"];
    type Draft = NewCity;
}
