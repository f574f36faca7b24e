use axum::Json;
use chrono::Utc;

use crate::types::HealthResponse;

/// Local health probe. Does not touch the backend.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: None,
        timestamp: Utc::now(),
    })
}
