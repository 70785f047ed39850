use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::base::{Creatable, Entity, EntityKind, Meta};
use crate::input::nullable;
use crate::record::{Record, RecordPatch};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub meta: Meta,
    pub city_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Linked amenities, managed through `/places/{id}/amenities`.
    #[serde(default)]
    pub amenity_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct NewPlace {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlacePatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: Option<Option<f64>>,
}

impl Place {
    pub fn new(city_id: Uuid, draft: NewPlace) -> Self {
        Self {
            meta: Meta::new(),
            city_id,
            user_id: draft.user_id,
            name: draft.name,
            description: draft.description,
            number_rooms: draft.number_rooms,
            number_bathrooms: draft.number_bathrooms,
            max_guest: draft.max_guest,
            price_by_night: draft.price_by_night,
            latitude: draft.latitude,
            longitude: draft.longitude,
            amenity_ids: Vec::new(),
        }
    }

    pub fn has_amenity(&self, amenity_id: Uuid) -> bool {
        self.amenity_ids.contains(&amenity_id)
    }

    /// Returns false if the amenity was already linked.
    pub fn link_amenity(&mut self, amenity_id: Uuid) -> bool {
        if self.has_amenity(amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }

    /// Returns false if the amenity was not linked.
    pub fn unlink_amenity(&mut self, amenity_id: Uuid) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| *id != amenity_id);
        self.amenity_ids.len() != before
    }
}

impl Entity for Place {
    const KIND: EntityKind = EntityKind::Place;
    type Patch = PlacePatch;

    fn meta(&self) -> &Meta {
        &self.meta
    }

    fn apply(&mut self, patch: PlacePatch) {
        if let Some(v) = patch.name { self.name = v; }
        if let Some(v) = patch.description { self.description = v; }
        if let Some(v) = patch.number_rooms { self.number_rooms = v; }
        if let Some(v) = patch.number_bathrooms { self.number_bathrooms = v; }
        if let Some(v) = patch.max_guest { self.max_guest = v; }
        if let Some(v) = patch.price_by_night { self.price_by_night = v; }
        if let Some(v) = patch.latitude { self.latitude = v; }
        if let Some(v) = patch.longitude { self.longitude = v; }
    }

    fn into_record(self) -> Record {
        Record::Place(self)
    }

    fn wrap_patch(patch: PlacePatch) -> RecordPatch {
        RecordPatch::Place(patch)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Place(p) => Some(p),
            _ => None,
        }
    }
}

impl Creatable for Place {
    const REQUIRED: &'static [&'static str] = &["user_id", "name"];
    type Draft = NewPlace;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loft() -> Place {
        Place::new(
            Uuid::new_v4(),
            NewPlace {
                user_id: Uuid::new_v4(),
                name: "Loft".into(),
                description: None,
                number_rooms: 2,
                number_bathrooms: 1,
                max_guest: 4,
                price_by_night: 120,
                latitude: None,
                longitude: None,
            },
        )
    }

    #[test]
    fn amenity_links_are_a_set() {
        let mut place = loft();
        let wifi = Uuid::new_v4();
        assert!(place.link_amenity(wifi));
        assert!(!place.link_amenity(wifi));
        assert_eq!(place.amenity_ids, vec![wifi]);
        assert!(place.unlink_amenity(wifi));
        assert!(!place.unlink_amenity(wifi));
    }

    #[test]
    fn patch_leaves_absent_fields_alone() {
        let mut place = loft();
        let owner = place.user_id;
        place.apply(PlacePatch { max_guest: Some(6), ..Default::default() });
        assert_eq!(place.max_guest, 6);
        assert_eq!(place.number_rooms, 2);
        assert_eq!(place.user_id, owner);
    }

    #[test]
    fn null_clears_optional_fields() {
        let mut place = loft();
        place.latitude = Some(37.7);
        place.description = Some("Sunny".into());
        let patch: PlacePatch = serde_json::from_value(serde_json::json!({
            "description": null,
            "latitude": null,
            "number_rooms": -1,
        }))
        .unwrap();
        place.apply(patch);
        assert_eq!(place.description, None);
        assert_eq!(place.latitude, None);
        assert_eq!(place.number_rooms, -1);
        assert_eq!(place.max_guest, 4);
    }
}
