//! Handlers shared by every entity: list, get, update, delete.
//!
//! Routes instantiate them per type, e.g. `get(show::<State>)`. Creation is
//! per entity because mandatory fields and parents differ.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use models::Entity;
use serde_json::{json, Value};
use service::{crud, Session};

use crate::errors::ApiResult;
use crate::extract::{parse_id, JsonBody};

/// Serialize one entity the same way for every endpoint.
pub fn one<T: Entity>(entity: T) -> Json<Value> {
    Json(entity.into_record().to_json())
}

pub fn many<T: Entity>(entities: Vec<T>) -> Json<Vec<Value>> {
    Json(entities.into_iter().map(|e| e.into_record().to_json()).collect())
}

pub fn created<T: Entity>(entity: T) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, one(entity))
}

pub fn empty() -> Json<Value> {
    Json(json!({}))
}

pub async fn list<T: Entity>(session: Session) -> ApiResult<Json<Vec<Value>>> {
    Ok(many(crud::list::<T>(&session).await?))
}

pub async fn show<T: Entity>(session: Session, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    Ok(one(crud::find::<T>(&session, id).await?))
}

pub async fn update<T: Entity>(
    mut session: Session,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    Ok(one(crud::update::<T>(&mut session, id, body).await?))
}

pub async fn destroy<T: Entity>(mut session: Session, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    crud::delete::<T>(&mut session, id).await?;
    Ok(empty())
}
