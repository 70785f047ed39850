//! Users differ from the other entities in one way: the password is hashed
//! with argon2 before it is stored, on create and on update.

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use models::user::NewUser;
use models::User;
use rand::rngs::OsRng;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::crud;
use crate::errors::ServiceError;
use crate::storage::Session;

/// Hash on the blocking pool; argon2 is deliberately slow.
pub async fn hash_password(plain: String) -> Result<String, ServiceError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| ServiceError::Hash(e.to_string()))
    })
    .await
    .map_err(|e| ServiceError::Hash(e.to_string()))?
}

pub fn verify_password(hash: &str, plain: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

pub async fn create(session: &mut Session, mut draft: NewUser) -> Result<User, ServiceError> {
    let hash = hash_password(std::mem::take(&mut draft.password)).await?;
    crud::create(session, User::new(draft, hash)).await
}

pub async fn update(
    session: &mut Session,
    id: Uuid,
    body: Map<String, Value>,
) -> Result<User, ServiceError> {
    crud::ensure_exists::<User>(session, id).await?;
    let mut patch = models::input::patch::<User>(body)?;
    if let Some(plain) = patch.password.take() {
        patch.password = Some(hash_password(plain).await?);
    }
    crud::patch_fields::<User>(session, id, patch).await
}
