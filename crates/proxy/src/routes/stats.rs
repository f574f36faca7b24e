use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, instrument};

use crate::{server::AppState, types::ErrorResponse};
use alp_common::StatsResponse;

/// Relay backend serving statistics.
#[instrument(skip(state))]
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.backend.stats().await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            error!(error = %e, "Failed to fetch backend stats");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "Failed to fetch stats from backend API",
                    "BACKEND_UNAVAILABLE",
                )),
            ))
        }
    }
}
