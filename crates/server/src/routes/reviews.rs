use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use models::{input, Place, Review, User};
use serde_json::Value;
use service::{crud, Session};

use crate::errors::{ApiError, ApiResult};
use crate::extract::{parse_id, JsonBody};
use crate::routes::resource::{created, many};

#[utoipa::path(get, path = "/api/v1/places/{place_id}/reviews", tag = "reviews", params(("place_id" = String, Path, description = "Place id")), responses((status = 200, description = "Reviews of the place"), (status = 404, description = "No such place")))]
pub async fn list_for_place(session: Session, Path(place_id): Path<String>) -> ApiResult<Json<Vec<Value>>> {
    let place_id = parse_id(&place_id)?;
    crud::ensure_exists::<Place>(&session, place_id).await?;
    let mut reviews = crud::list::<Review>(&session).await?;
    reviews.retain(|r| r.place_id == place_id);
    Ok(many(reviews))
}

#[utoipa::path(post, path = "/api/v1/places/{place_id}/reviews", tag = "reviews", params(("place_id" = String, Path, description = "Place id")), request_body = crate::openapi::NewReviewDoc, responses((status = 201, description = "Created"), (status = 400, description = "Not a JSON, or missing user_id/text"), (status = 404, description = "No such place or user")))]
pub async fn create(
    mut session: Session,
    Path(place_id): Path<String>,
    body: Result<JsonBody, ApiError>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let place_id = parse_id(&place_id)?;
    crud::ensure_exists::<Place>(&session, place_id).await?;
    let JsonBody(body) = body?;
    let draft = input::draft::<Review>(body)?;
    crud::ensure_exists::<User>(&session, draft.user_id).await?;
    let review = crud::create(&mut session, Review::new(place_id, draft)).await?;
    Ok(created(review))
}
