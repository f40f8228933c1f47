//! HTTP handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::json;

use clipper_models::{BatchRequest, BatchResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Process a batch of clip requests.
///
/// The orchestrator's response is final before reporting starts; job-status
/// reporting is best-effort and cannot change it.
pub async fn create_clips(
    State(state): State<AppState>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> ApiResult<Json<BatchResponse>> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let response = state.orchestrator.process(&request).await;
    state.reporter.report(&response).await;

    Ok(Json(response))
}
