//! Health check handler

use axum::Json;
use touch_core::HealthStatus;

/// GET /health
/// Liveness check; never touches the parameter store
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
