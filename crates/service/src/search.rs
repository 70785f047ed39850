//! `POST /places_search`: places by state, city and amenity.

use std::collections::HashSet;

use models::{City, Place};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::Session;

/// Search filters. Ids that do not parse or match nothing are ignored. An
/// absent list and `null` both mean no filter.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub states: Option<Vec<String>>,
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
}

fn ids(raw: &[String]) -> HashSet<Uuid> {
    raw.iter().filter_map(|s| Uuid::parse_str(s).ok()).collect()
}

/// - No filter at all: every place.
/// - `states`/`cities`: places in any listed city or in any city of a listed
///   state.
/// - `amenities`: keep only places linked to every listed amenity.
pub async fn places(session: &Session, query: PlaceQuery) -> Result<Vec<Place>, ServiceError> {
    let raw_states = query.states.unwrap_or_default();
    let raw_cities = query.cities.unwrap_or_default();
    let raw_amenities = query.amenities.unwrap_or_default();

    let places = session.all::<Place>().await?;
    let states = ids(&raw_states);
    let mut cities = ids(&raw_cities);
    let amenities = ids(&raw_amenities);

    let by_location = !raw_states.is_empty() || !raw_cities.is_empty();
    if !states.is_empty() {
        let all_cities: Vec<City> = session.all::<City>().await?;
        cities.extend(
            all_cities
                .iter()
                .filter(|c| states.contains(&c.state_id))
                .map(|c| c.meta.id),
        );
    }

    let mut found: Vec<Place> = if by_location {
        places.into_iter().filter(|p| cities.contains(&p.city_id)).collect()
    } else {
        places
    };

    if !raw_amenities.is_empty() {
        // An unparseable amenity id matches no place.
        let unparseable = raw_amenities.iter().any(|s| Uuid::parse_str(s).is_err());
        if unparseable {
            found.clear();
        } else {
            found.retain(|p| amenities.iter().all(|a| p.has_amenity(*a)));
        }
    }

    Ok(found)
}
