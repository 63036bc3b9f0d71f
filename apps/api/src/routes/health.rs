use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner with the feature roadmap.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "LinkedIn Content Generator API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": {
            "content_generation": "available",
            "seo_optimization": "available",
            "hashtag_generation": "available",
            "carousel_support": "available",
            "linkedin_posting": "coming_soon",
            "image_generation": "coming_soon",
            "auto_scheduling": "coming_soon"
        }
    }))
}

/// GET /health
/// Reports which external credentials are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "openai_configured": state.config.openai_configured(),
        "linkedin_configured": state.linkedin.is_configured()
    }))
}
