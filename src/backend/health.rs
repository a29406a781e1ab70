//! Liveness endpoint

use axum::Json;

use crate::shared::HealthStatus;

/// `GET /health/`
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
