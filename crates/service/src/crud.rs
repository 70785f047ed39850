//! The five operations every entity supports, on top of a [`Session`].
//!
//! Each mutating call saves before returning.

use models::Entity;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::Session;

pub async fn list<T: Entity>(session: &Session) -> Result<Vec<T>, ServiceError> {
    session.all::<T>().await
}

/// The entity, or `NotFound`.
pub async fn find<T: Entity>(session: &Session, id: Uuid) -> Result<T, ServiceError> {
    session
        .get::<T>(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(T::KIND.class_name()))
}

/// Persist a freshly built entity.
pub async fn create<T: Entity>(session: &mut Session, entity: T) -> Result<T, ServiceError> {
    session.add(entity.clone());
    session.save().await?;
    info!(kind = %T::KIND, id = %entity.id(), "created");
    Ok(entity)
}

/// Look the entity up, then assign the allow-listed fields of `body`.
pub async fn update<T: Entity>(
    session: &mut Session,
    id: Uuid,
    body: Map<String, Value>,
) -> Result<T, ServiceError> {
    ensure_exists::<T>(session, id).await?;
    let patch = models::input::patch::<T>(body)?;
    patch_fields::<T>(session, id, patch).await
}

/// Assign an already-parsed patch to the stored entity and return it.
/// `NotFound` if the entity was deleted in the meantime. `updated_at` is left
/// as is.
pub async fn patch_fields<T: Entity>(
    session: &mut Session,
    id: Uuid,
    patch: T::Patch,
) -> Result<T, ServiceError> {
    session.update::<T>(id, patch);
    session.save().await?;
    info!(kind = %T::KIND, %id, "updated");
    find::<T>(session, id).await
}

pub async fn delete<T: Entity>(session: &mut Session, id: Uuid) -> Result<(), ServiceError> {
    let entity = find::<T>(session, id).await?;
    session.delete(&entity);
    session.save().await?;
    info!(kind = %T::KIND, %id, "deleted");
    Ok(())
}

/// Fail with `NotFound` unless an entity of type `T` exists.
pub async fn ensure_exists<T: Entity>(session: &Session, id: Uuid) -> Result<(), ServiceError> {
    find::<T>(session, id).await.map(|_| ())
}
