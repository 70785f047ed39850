use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use models::{input, City, Place, User};
use serde_json::Value;
use service::search::{self, PlaceQuery};
use service::{crud, Session};

use crate::errors::{ApiError, ApiResult};
use crate::extract::{parse_id, JsonBody};
use crate::routes::resource::{created, many};

#[utoipa::path(get, path = "/api/v1/cities/{city_id}/places", tag = "places", params(("city_id" = String, Path, description = "City id")), responses((status = 200, description = "Places in the city"), (status = 404, description = "No such city")))]
pub async fn list_for_city(session: Session, Path(city_id): Path<String>) -> ApiResult<Json<Vec<Value>>> {
    let city_id = parse_id(&city_id)?;
    crud::ensure_exists::<City>(&session, city_id).await?;
    let mut places = crud::list::<Place>(&session).await?;
    places.retain(|p| p.city_id == city_id);
    Ok(many(places))
}

#[utoipa::path(post, path = "/api/v1/cities/{city_id}/places", tag = "places", params(("city_id" = String, Path, description = "City id")), request_body = crate::openapi::NewPlaceDoc, responses((status = 201, description = "Created"), (status = 400, description = "Not a JSON, or missing user_id/name"), (status = 404, description = "No such city or user")))]
pub async fn create(
    mut session: Session,
    Path(city_id): Path<String>,
    body: Result<JsonBody, ApiError>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let city_id = parse_id(&city_id)?;
    crud::ensure_exists::<City>(&session, city_id).await?;
    let JsonBody(body) = body?;
    let draft = input::draft::<Place>(body)?;
    crud::ensure_exists::<User>(&session, draft.user_id).await?;
    let place = crud::create(&mut session, Place::new(city_id, draft)).await?;
    Ok(created(place))
}

#[utoipa::path(post, path = "/api/v1/places_search", tag = "places", request_body = crate::openapi::PlaceSearchDoc, responses((status = 200, description = "Matching places"), (status = 400, description = "Not a JSON")))]
pub async fn search(session: Session, JsonBody(body): JsonBody) -> ApiResult<Json<Vec<Value>>> {
    let query: PlaceQuery = input::typed(body)?;
    Ok(many(search::places(&session, query).await?))
}
