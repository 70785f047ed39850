use axum::http::StatusCode;
use axum::Json;
use models::{input, Amenity};
use serde_json::Value;
use service::{crud, Session};

use crate::errors::ApiResult;
use crate::extract::JsonBody;
use crate::routes::resource::created;

#[utoipa::path(post, path = "/api/v1/amenities", tag = "amenities", request_body = crate::openapi::NewAmenityDoc, responses((status = 201, description = "Created"), (status = 400, description = "Not a JSON, or missing name")))]
pub async fn create(mut session: Session, JsonBody(body): JsonBody) -> ApiResult<(StatusCode, Json<Value>)> {
    let draft = input::draft::<Amenity>(body)?;
    let amenity = crud::create(&mut session, Amenity::new(draft)).await?;
    Ok(created(amenity))
}
