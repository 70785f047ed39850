use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use service::place_amenities::{self, Linked};
use service::Session;

use crate::errors::ApiResult;
use crate::extract::parse_id;
use crate::routes::resource::{empty, many, one};

#[utoipa::path(get, path = "/api/v1/places/{place_id}/amenities", tag = "places", params(("place_id" = String, Path, description = "Place id")), responses((status = 200, description = "Amenities of the place"), (status = 404, description = "No such place")))]
pub async fn list(session: Session, Path(place_id): Path<String>) -> ApiResult<Json<Vec<Value>>> {
    let place_id = parse_id(&place_id)?;
    Ok(many(place_amenities::list(&session, place_id).await?))
}

#[utoipa::path(post, path = "/api/v1/places/{place_id}/amenities/{amenity_id}", tag = "places", params(("place_id" = String, Path, description = "Place id"), ("amenity_id" = String, Path, description = "Amenity id")), responses((status = 201, description = "Linked"), (status = 200, description = "Already linked"), (status = 404, description = "No such place or amenity")))]
pub async fn link(
    mut session: Session,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let (place_id, amenity_id) = (parse_id(&place_id)?, parse_id(&amenity_id)?);
    let (amenity, linked) = place_amenities::link(&mut session, place_id, amenity_id).await?;
    let status = match linked {
        Linked::Created => StatusCode::CREATED,
        Linked::Existing => StatusCode::OK,
    };
    Ok((status, one(amenity)))
}

#[utoipa::path(delete, path = "/api/v1/places/{place_id}/amenities/{amenity_id}", tag = "places", params(("place_id" = String, Path, description = "Place id"), ("amenity_id" = String, Path, description = "Amenity id")), responses((status = 200, description = "Unlinked"), (status = 404, description = "No such place, amenity or link")))]
pub async fn unlink(
    mut session: Session,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let (place_id, amenity_id) = (parse_id(&place_id)?, parse_id(&amenity_id)?);
    place_amenities::unlink(&mut session, place_id, amenity_id).await?;
    Ok(empty())
}
