//! Handler for the generation pipeline endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use vibeshift_pipeline::{GenerationRequest, GenerationSummary};

use crate::error::GenerationFailure;
use crate::state::AppState;

/// POST /api/v1/generate
///
/// Runs the full pipeline for an existing project and returns the summary.
/// Provider failures degrade the result but still answer `success: true`;
/// only a malformed body, an unknown project, or a store failure fail.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationSummary>, GenerationFailure> {
    let Json(request) = payload?;
    let summary = state.pipeline.run(&request).await?;
    Ok(Json(summary))
}
