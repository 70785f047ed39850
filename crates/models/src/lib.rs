//! Domain records of the HBnB API.
//!
//! Every entity shares [`Meta`] (`id`, `created_at`, `updated_at`) and exposes
//! two allow-listed inputs: a create draft and a patch. Request bodies are
//! only ever turned into entities through those inputs, see [`input`].

pub mod errors;
pub mod base;
pub mod input;
pub mod record;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use base::{Creatable, Entity, EntityKind, Meta};
pub use city::City;
pub use errors::ModelError;
pub use place::Place;
pub use record::{Record, RecordPatch};
pub use review::Review;
pub use state::State;
pub use user::User;
