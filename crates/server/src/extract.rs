use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ApiError;

/// A request body that must be a JSON object.
///
/// Anything else (empty body, invalid JSON, a JSON array or scalar) is
/// rejected with 400 `{"error": "Not a JSON"}`. The content type is not
/// checked. Take `Result<JsonBody, ApiError>` to decide when the rejection
/// surfaces.
#[derive(Debug)]
pub struct JsonBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::not_json())?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(JsonBody(map)),
            _ => Err(ApiError::not_json()),
        }
    }
}

/// Ids in URLs are UUIDs; anything else cannot match an entity.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}
