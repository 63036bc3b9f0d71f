pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_content;
use crate::linkedin::handlers as linkedin;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/generate-content", post(handle_generate_content))
        .route("/post-to-linkedin", post(linkedin::handle_post))
        .route("/linkedin-status", get(linkedin::handle_status))
        .with_state(state)
}
