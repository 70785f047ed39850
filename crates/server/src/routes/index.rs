use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use common::types::Health;

use crate::errors::ApiResult;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/v1/status", tag = "index", responses((status = 200, description = "API is up", body = crate::openapi::HealthResponse)))]
pub async fn status() -> Json<Health> {
    Json(Health::ok())
}

/// Entity count per collection.
#[utoipa::path(get, path = "/api/v1/stats", tag = "index", responses((status = 200, description = "Counts per collection")))]
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<BTreeMap<&'static str, usize>>> {
    Ok(Json(service::stats::counts(&state.storage).await?))
}
