mod advisor;
mod catalog;
mod config;
mod engine;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{Explainer, LlmExplainer, UnconfiguredExplainer};
use crate::catalog::load_catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UniMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load the university catalog once; it is read-only from here on
    let catalog = load_catalog(config.catalog_path.as_deref()).context("Failed to load catalog")?;

    // Advisor is optional: without an API key every call degrades to the fallback text
    let explainer: Arc<dyn Explainer> = match &config.anthropic_api_key {
        Some(key) => {
            let mut llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            if let Some(url) = &config.anthropic_api_url {
                llm = llm.with_api_url(url.clone());
            }
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmExplainer(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; advisor responses will use the fallback message");
            Arc::new(UnconfiguredExplainer)
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        explainer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
