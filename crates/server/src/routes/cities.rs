use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use models::{input, City, State};
use serde_json::Value;
use service::{crud, Session};

use crate::errors::{ApiError, ApiResult};
use crate::extract::{parse_id, JsonBody};
use crate::routes::resource::{created, many};

#[utoipa::path(get, path = "/api/v1/states/{state_id}/cities", tag = "cities", params(("state_id" = String, Path, description = "State id")), responses((status = 200, description = "Cities of the state"), (status = 404, description = "No such state")))]
pub async fn list_for_state(session: Session, Path(state_id): Path<String>) -> ApiResult<Json<Vec<Value>>> {
    let state_id = parse_id(&state_id)?;
    crud::ensure_exists::<State>(&session, state_id).await?;
    let mut cities = crud::list::<City>(&session).await?;
    cities.retain(|c| c.state_id == state_id);
    Ok(many(cities))
}

#[utoipa::path(post, path = "/api/v1/states/{state_id}/cities", tag = "cities", params(("state_id" = String, Path, description = "State id")), request_body = crate::openapi::NewCityDoc, responses((status = 201, description = "Created"), (status = 400, description = "Not a JSON, or missing name"), (status = 404, description = "No such state")))]
pub async fn create(
    mut session: Session,
    Path(state_id): Path<String>,
    body: Result<JsonBody, ApiError>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let state_id = parse_id(&state_id)?;
    crud::ensure_exists::<State>(&session, state_id).await?;
    let JsonBody(body) = body?;
    let draft = input::draft::<City>(body)?;
    let city = crud::create(&mut session, City::new(state_id, draft)).await?;
    Ok(created(city))
}
