use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewStateDoc { pub name: String }

#[derive(ToSchema)]
pub struct NewCityDoc { pub name: String }

#[derive(ToSchema)]
pub struct NewAmenityDoc { pub name: String }

#[derive(ToSchema)]
pub struct NewUserDoc {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(ToSchema)]
pub struct NewPlaceDoc {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(ToSchema)]
pub struct NewReviewDoc { pub user_id: Uuid, pub text: String }

#[derive(ToSchema)]
pub struct PlaceSearchDoc {
    pub states: Option<Vec<Uuid>>,
    pub cities: Option<Vec<Uuid>>,
    pub amenities: Option<Vec<Uuid>>,
}

// Shared list/get/update/delete handlers are generic over the entity and are
// not listed here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::status,
        crate::routes::index::stats,
        crate::routes::states::create,
        crate::routes::cities::list_for_state,
        crate::routes::cities::create,
        crate::routes::amenities::create,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::places::list_for_city,
        crate::routes::places::create,
        crate::routes::places::search,
        crate::routes::reviews::list_for_place,
        crate::routes::reviews::create,
        crate::routes::place_amenities::list,
        crate::routes::place_amenities::link,
        crate::routes::place_amenities::unlink,
    ),
    components(
        schemas(
            HealthResponse,
            NewStateDoc,
            NewCityDoc,
            NewAmenityDoc,
            NewUserDoc,
            NewPlaceDoc,
            NewReviewDoc,
            PlaceSearchDoc,
        )
    ),
    tags(
        (name = "index"),
        (name = "states"),
        (name = "cities"),
        (name = "amenities"),
        (name = "users"),
        (name = "places"),
        (name = "reviews")
    )
)]
pub struct ApiDoc;
