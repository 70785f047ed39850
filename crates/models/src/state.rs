use serde::{Deserialize, Serialize};

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewState {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatePatch {
    pub name: Option<String>,
}

impl State {
    pub fn new(draft: NewState) -> Self {
        Self { meta: Meta::new(), name: draft.name }
    }
}

impl Entity for State {
    const KIND: EntityKind = EntityKind::State;
    type Patch = StatePatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn apply(&mut self, patch: StatePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }

    fn into_record(self) -> Record {
        Record::State(self)
    }

    fn wrap_patch(patch: StatePatch) -> RecordPatch {
        RecordPatch::State(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::State(s) => Some(s),
            _ => None,
        }
    }
}

impl Creatable for State {
    const REQUIRED: &'static [&'static str] = &["name"];
    type Draft = NewState;
}
