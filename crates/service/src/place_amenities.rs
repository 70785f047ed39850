//! Links between places and amenities. A place keeps the ids of its
//! amenities; ids of deleted amenities are skipped when listing.

use models::{Amenity, Place};
use uuid::Uuid;

use crate::crud;
use crate::errors::ServiceError;
use crate::storage::Session;

pub async fn list(session: &Session, place_id: Uuid) -> Result<Vec<Amenity>, ServiceError> {
    let place = crud::find::<Place>(session, place_id).await?;
    let mut amenities = Vec::with_capacity(place.amenity_ids.len());
    for id in &place.amenity_ids {
        if let Some(amenity) = session.get::<Amenity>(*id).await? {
            amenities.push(amenity);
        }
    }
    Ok(amenities)
}

/// Whether `link` created a new association or found an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linked {
    Created,
    Existing,
}

pub async fn link(
    session: &mut Session,
    place_id: Uuid,
    amenity_id: Uuid,
) -> Result<(Amenity, Linked), ServiceError> {
    let place = crud::find::<Place>(session, place_id).await?;
    let amenity = crud::find::<Amenity>(session, amenity_id).await?;
    if place.has_amenity(amenity_id) {
        return Ok((amenity, Linked::Existing));
    }
    session.link_amenity(place_id, amenity_id);
    session.save().await?;
    tracing::info!(%place_id, %amenity_id, "amenity linked");
    Ok((amenity, Linked::Created))
}

pub async fn unlink(session: &mut Session, place_id: Uuid, amenity_id: Uuid) -> Result<(), ServiceError> {
    let place = crud::find::<Place>(session, place_id).await?;
    crud::ensure_exists::<Amenity>(session, amenity_id).await?;
    if !place.has_amenity(amenity_id) {
        return Err(ServiceError::NotFound("amenity not linked to place".into()));
    }
    session.unlink_amenity(place_id, amenity_id);
    session.save().await?;
    tracing::info!(%place_id, %amenity_id, "amenity unlinked");
    Ok(())
}
