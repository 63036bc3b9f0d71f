mod config;
mod errors;
mod generation;
mod linkedin;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::linkedin::LinkedInClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postgen API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (no key → every component uses its fallback)
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        info!("OPENAI_API_KEY not set; using built-in fallback content");
    }

    // Initialize LinkedIn posting stub
    let linkedin = LinkedInClient::from_config(&config);
    info!("LinkedIn posting configured: {}", linkedin.is_configured());

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        linkedin,
        config: config.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(config.cors_allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = bind_listener(&config).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds HOST:PORT. HOST may be a hostname (`localhost`) or an IPv4/IPv6 literal.
async fn bind_listener(config: &Config) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))
}
