use serde::{Deserialize, Serialize};

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::input::nullable;
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub meta: Meta,
    pub email: String,
    /// Password hash. Kept in storage, stripped from API output.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// `email` is an identity field and cannot be changed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserPatch {
    pub password: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: Option<Option<String>>,
}

impl User {
    /// `password_hash` must already be hashed; drafts carry the plain text.
    pub fn new(draft: NewUser, password_hash: String) -> Self {
        Self {
            meta: Meta::new(),
            email: draft.email,
            password: password_hash,
            first_name: draft.first_name,
            last_name: draft.last_name,
        }
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    type Patch = UserPatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Callers hash `patch.password` before applying.
    fn apply(&mut self, patch: UserPatch) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
    }

    fn into_record(self) -> Record {
        Record::User(self)
    }

    fn wrap_patch(patch: UserPatch) -> RecordPatch {
        RecordPatch::User(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::User(u) => Some(u),
            _ => None,
        }
    }
}

impl Creatable for User {
    const REQUIRED: &'static [&'static str] = &["email", "password"];
    type Draft = NewUser;
}
