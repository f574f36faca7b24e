use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info, instrument, warn};

use crate::{server::AppState, types::ErrorResponse};
use alp_common::{GenerateRequest, GenerateResponse};

/// Upper bound on prompt size; anything larger is rejected before it
/// reaches the backend.
const MAX_PROMPT_CHARS: usize = 10_000;

/// Forward a prompt submission to the backend.
///
/// The proxy validates the prompt, attaches the configured API key, and
/// relays the backend's response untouched. Backend failures map to `502`
/// with a structured error body; the client decides how to present them.
#[instrument(skip(state, request))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.prompt.trim().is_empty() {
        warn!("Empty prompt rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "Prompt cannot be empty. Please provide a prompt string.",
                "EMPTY_PROMPT",
            )),
        ));
    }

    if request.prompt.chars().count() > MAX_PROMPT_CHARS {
        warn!(prompt_len = request.prompt.len(), "Oversized prompt rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                format!("Prompt too long (max {} characters)", MAX_PROMPT_CHARS),
                "PROMPT_TOO_LONG",
            )),
        ));
    }

    info!(
        prompt_len = request.prompt.len(),
        model = %request.model,
        "Forwarding prompt submission"
    );

    match state.backend.generate(&request).await {
        Ok(response) => {
            info!(
                model = %response.model,
                latency_ms = response.metrics.latency,
                "Backend responded"
            );
            Ok(Json(response))
        }
        Err(e) => {
            error!(error = %e, model = %request.model, "Backend request failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "Failed to fetch from backend API",
                    "BACKEND_UNAVAILABLE",
                )),
            ))
        }
    }
}
