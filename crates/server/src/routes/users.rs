use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use models::{input, User};
use serde_json::Value;
use service::{users, Session};

use crate::errors::ApiResult;
use crate::extract::{parse_id, JsonBody};
use crate::routes::resource::{created, one};

#[utoipa::path(post, path = "/api/v1/users", tag = "users", request_body = crate::openapi::NewUserDoc, responses((status = 201, description = "Created; the password is never returned"), (status = 400, description = "Not a JSON, or missing email/password")))]
pub async fn create(mut session: Session, JsonBody(body): JsonBody) -> ApiResult<(StatusCode, Json<Value>)> {
    let draft = input::draft::<User>(body)?;
    let user = users::create(&mut session, draft).await?;
    Ok(created(user))
}

/// Like the shared update, but a new password is hashed first.
#[utoipa::path(put, path = "/api/v1/users/{user_id}", tag = "users", params(("user_id" = String, Path, description = "User id")), responses((status = 200, description = "Updated"), (status = 400, description = "Not a JSON"), (status = 404, description = "Not found")))]
pub async fn update(
    mut session: Session,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&user_id)?;
    Ok(one(users::update(&mut session, id, body).await?))
}
