use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub meta: Meta,
    pub place_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub user_id: Uuid,
    pub text: String,
}

/// Only the text of a review can change; author and place are fixed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReviewPatch {
    pub text: Option<String>,
}

impl Review {
    pub fn new(place_id: Uuid, draft: NewReview) -> Self {
        Self { meta: Meta::new(), place_id, user_id: draft.user_id, text: draft.text }
    }
}

impl Entity for Review {
    const KIND: EntityKind = EntityKind::Review;
    type Patch = ReviewPatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn apply(&mut self, patch: ReviewPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn into_record(self) -> Record {
        Record::Review(self)
    }

    fn wrap_patch(patch: ReviewPatch) -> RecordPatch {
        RecordPatch::Review(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Review(r) => Some(r),
            _ => None,
        }
    }
}

impl Creatable for Review {
    const REQUIRED: &'static [&'static str] = &["user_id", "text"];
    type Draft = NewReview;
}
