//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::pipeline::generate_content;
use crate::models::content::{ContentRequest, GenerationRequest, GenerationResult};
use crate::state::AppState;

/// POST /generate-content
///
/// Validates the request, then runs the generation pipeline in its own task.
/// Missing provider credentials never fail the request; only a failure of the
/// pipeline task itself surfaces as `AppError::Generation`.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let request = GenerationRequest::try_from(request)?;
    let llm = state.llm.clone();

    let result = tokio::spawn(async move { generate_content(llm.as_ref(), &request).await })
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(Json(result))
}
