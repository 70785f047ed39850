use axum::extract::FromRef;
use service::SharedEngine;

/// Shared by every request; the engine is the only thing in it.
#[derive(Clone)]
pub struct AppState {
    pub storage: SharedEngine,
}

impl AppState {
    pub fn new(storage: SharedEngine) -> Self {
        Self { storage }
    }
}

impl FromRef<AppState> for SharedEngine {
    fn from_ref(state: &AppState) -> Self {
        state.storage.clone()
    }
}
