//! Service layer between the HTTP routes and the storage engines.
//! - `storage` holds the engine abstraction and the request-scoped session.
//! - `crud` is the list/get/create/update/delete pattern every entity shares.
//! - The remaining modules cover what is specific to one entity.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod crud;
pub mod users;
pub mod place_amenities;
pub mod search;
pub mod stats;

pub use errors::ServiceError;
pub use storage::{Session, SharedEngine, StorageEngine};
