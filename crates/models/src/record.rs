use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::amenity::AmenityPatch;
use crate::base::{Entity, EntityKind};
use crate::city::CityPatch;
use crate::errors::ModelError;
use crate::place::PlacePatch;
use crate::review::ReviewPatch;
use crate::state::StatePatch;
use crate::user::UserPatch;
use crate::{Amenity, City, Place, Review, State, User};

/// Any stored entity, tagged with its class name under `__class__`.
///
/// This is both the storage file format and the API output shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Record {
    Amenity(Amenity),
    City(City),
    Place(Place),
    Review(Review),
    State(State),
    User(User),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Amenity(_) => EntityKind::Amenity,
            Record::City(_) => EntityKind::City,
            Record::Place(_) => EntityKind::Place,
            Record::Review(_) => EntityKind::Review,
            Record::State(_) => EntityKind::State,
            Record::User(_) => EntityKind::User,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Record::Amenity(e) => e.id(),
            Record::City(e) => e.id(),
            Record::Place(e) => e.id(),
            Record::Review(e) => e.id(),
            Record::State(e) => e.id(),
            Record::User(e) => e.id(),
        }
    }

    pub fn key(&self) -> String {
        self.kind().key(self.id())
    }

    /// Public JSON view: every attribute plus `__class__`, minus a user's
    /// password hash.
    pub fn to_json(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let (Record::User(_), Value::Object(map)) = (self, &mut value) {
            map.remove("password");
        }
        value
    }

    /// Apply a patch of the same kind in place.
    pub fn apply(&mut self, patch: RecordPatch) -> Result<(), ModelError> {
        match (self, patch) {
            (Record::Amenity(e), RecordPatch::Amenity(p)) => e.apply(p),
            (Record::City(e), RecordPatch::City(p)) => e.apply(p),
            (Record::Place(e), RecordPatch::Place(p)) => e.apply(p),
            (Record::Review(e), RecordPatch::Review(p)) => e.apply(p),
            (Record::State(e), RecordPatch::State(p)) => e.apply(p),
            (Record::User(e), RecordPatch::User(p)) => e.apply(p),
            (record, patch) => {
                return Err(ModelError::Validation(format!(
                    "{} patch cannot apply to a {}",
                    patch.kind(),
                    record.kind()
                )))
            }
        }
        Ok(())
    }
}

/// Allow-listed fields of any entity, as staged by an update.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordPatch {
    Amenity(AmenityPatch),
    City(CityPatch),
    Place(PlacePatch),
    Review(ReviewPatch),
    State(StatePatch),
    User(UserPatch),
}

impl RecordPatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            RecordPatch::Amenity(_) => EntityKind::Amenity,
            RecordPatch::City(_) => EntityKind::City,
            RecordPatch::Place(_) => EntityKind::Place,
            RecordPatch::Review(_) => EntityKind::Review,
            RecordPatch::State(_) => EntityKind::State,
            RecordPatch::User(_) => EntityKind::User,
        }
    }
}
