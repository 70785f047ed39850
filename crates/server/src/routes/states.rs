use axum::http::StatusCode;
use axum::Json;
use models::{input, State};
use serde_json::Value;
use service::{crud, Session};

use crate::errors::ApiResult;
use crate::extract::JsonBody;
use crate::routes::resource::created;

#[utoipa::path(post, path = "/api/v1/states", tag = "states", request_body = crate::openapi::NewStateDoc, responses((status = 201, description = "Created"), (status = 400, description = "Not a JSON, or missing name")))]
pub async fn create(mut session: Session, JsonBody(body): JsonBody) -> ApiResult<(StatusCode, Json<Value>)> {
    let draft = input::draft::<State>(body)?;
    let state = crud::create(&mut session, State::new(draft)).await?;
    Ok(created(state))
}
