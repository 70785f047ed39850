use axum::{
    http::Request,
    routing::{get, post},
    Router,
};
use models::{Amenity, City, Place, Review, State, User};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod amenities;
pub mod cities;
pub mod index;
pub mod place_amenities;
pub mod places;
pub mod resource;
pub mod reviews;
pub mod states;
pub mod users;

pub const API_PREFIX: &str = "/api/v1";

/// Every `/api/v1` route.
pub fn api_routes() -> Router<AppState> {
    use resource::{destroy, list, show, update};

    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats))
        .route("/states", get(list::<State>).post(states::create))
        .route(
            "/states/:state_id",
            get(show::<State>).put(update::<State>).delete(destroy::<State>),
        )
        .route(
            "/states/:state_id/cities",
            get(cities::list_for_state).post(cities::create),
        )
        .route(
            "/cities/:city_id",
            get(show::<City>).put(update::<City>).delete(destroy::<City>),
        )
        .route(
            "/cities/:city_id/places",
            get(places::list_for_city).post(places::create),
        )
        .route(
            "/places/:place_id",
            get(show::<Place>).put(update::<Place>).delete(destroy::<Place>),
        )
        .route(
            "/places/:place_id/reviews",
            get(reviews::list_for_place).post(reviews::create),
        )
        .route("/places/:place_id/amenities", get(place_amenities::list))
        .route(
            "/places/:place_id/amenities/:amenity_id",
            post(place_amenities::link).delete(place_amenities::unlink),
        )
        .route("/places_search", post(places::search))
        .route(
            "/reviews/:review_id",
            get(show::<Review>).put(update::<Review>).delete(destroy::<Review>),
        )
        .route("/amenities", get(list::<Amenity>).post(amenities::create))
        .route(
            "/amenities/:amenity_id",
            get(show::<Amenity>).put(update::<Amenity>).delete(destroy::<Amenity>),
        )
        .route("/users", get(list::<User>).post(users::create))
        .route(
            "/users/:user_id",
            get(show::<User>).put(users::update).delete(destroy::<User>),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Build the full application router: API, OpenAPI docs, JSON 404 fallback.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .nest(API_PREFIX, api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// The router wrapped so that `/api/v1/states/` and `/api/v1/states` match
/// the same route. Trailing slashes must be trimmed before routing, so this
/// wraps the router instead of being one of its layers.
pub fn build_app(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors))
}

/// Request type accepted by [`build_app`].
pub type AppRequest = Request<axum::body::Body>;
