//! Application state for the touch control API

use std::sync::Arc;

use touch_core::ParamStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Parameter store holding `DisableTouchInput`
    store: Arc<dyn ParamStore>,
}

impl AppState {
    /// Create a new AppState around the given store
    pub fn new(store: Arc<dyn ParamStore>) -> Self {
        Self { store }
    }

    /// Get the parameter store
    pub fn store(&self) -> &dyn ParamStore {
        self.store.as_ref()
    }
}
