//! Turning a JSON object into allow-listed entity inputs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::base::{Creatable, Entity};
use crate::errors::ModelError;

/// Check mandatory fields by presence, then deserialize the typed draft.
pub fn draft<T: Creatable>(body: Map<String, Value>) -> Result<T::Draft, ModelError> {
    require(&body, T::REQUIRED)?;
    typed(body)
}

/// Deserialize the typed patch; protected and unknown keys are ignored.
pub fn patch<T: Entity>(body: Map<String, Value>) -> Result<T::Patch, ModelError> {
    typed(body)
}

/// First missing field in `fields`, in order.
pub fn require(body: &Map<String, Value>, fields: &'static [&'static str]) -> Result<(), ModelError> {
    match fields.iter().find(|f| !body.contains_key(**f)) {
        Some(missing) => Err(ModelError::Missing(*missing)),
        None => Ok(()),
    }
}

pub fn typed<T: DeserializeOwned>(body: Map<String, Value>) -> Result<T, ModelError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| ModelError::Validation(e.to_string()))
}

/// For patch fields that may be cleared: absent stays `None` (via
/// `#[serde(default)]`), `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
