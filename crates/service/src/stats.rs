use std::collections::BTreeMap;

use models::EntityKind;

use crate::errors::ServiceError;
use crate::storage::SharedEngine;

/// Number of stored entities per collection name, alphabetically ordered.
pub async fn counts(engine: &SharedEngine) -> Result<BTreeMap<&'static str, usize>, ServiceError> {
    let mut out = BTreeMap::new();
    for kind in EntityKind::ALL {
        out.insert(kind.collection(), engine.count(Some(kind)).await?);
    }
    Ok(out)
}
