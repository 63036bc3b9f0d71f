use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::linkedin::PostOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkedInStatusResponse {
    pub configured: bool,
    pub status: &'static str,
    pub message: &'static str,
}

/// POST /post-to-linkedin
pub async fn handle_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Json<PostOutcome> {
    info!(
        "Post requested ({} chars, {} hashtags)",
        request.content.chars().count(),
        request.hashtags.len()
    );
    Json(state.linkedin.post_content(&request.content, &request.hashtags))
}

/// GET /linkedin-status
pub async fn handle_status(State(state): State<AppState>) -> Json<LinkedInStatusResponse> {
    let response = if state.linkedin.is_configured() {
        LinkedInStatusResponse {
            configured: true,
            status: "ready",
            message: "LinkedIn API is configured and ready",
        }
    } else {
        LinkedInStatusResponse {
            configured: false,
            status: "not_configured",
            message: "LinkedIn API credentials not found in .env file",
        }
    };
    Json(response)
}
