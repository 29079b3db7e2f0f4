//! touch-api - REST API layer for the touch control service
//!
//! This crate provides the HTTP API that uses the `ParamStore` trait to read
//! and toggle the `DisableTouchInput` parameter. It is store-agnostic.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use touch_api::{create_router, AppState};
//! use touch_core::FileParamStore;
//!
//! let store = FileParamStore::open("/data/params").await?;
//! let router = create_router(AppState::new(Arc::new(store)));
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Route table, also printed by the daemon at startup
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health check"),
    ("GET", "/touch/status", "Get touch status"),
    ("POST", "/touch/set", "Enable/disable touch"),
];

/// Create the touch control router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/touch/status", get(handlers::touch::get_touch_status))
        .route("/touch/set", post(handlers::touch::set_touch_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
