mod config;
mod errors;
mod llm_client;
mod models;
mod recommendations;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionBackend, LlmClient};
use crate::recommendations::fetcher::RecommendationFetcher;
use crate::render::PageRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing API key is not fatal
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EquiAid Navigator v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client, or run form-only without one
    let backend: Option<Arc<dyn CompletionBackend>> = match config.openai_api_key.clone() {
        Some(api_key) => {
            let llm = LlmClient::new(api_key, &config.openai_base_url)?;
            info!(
                "LLM client initialized (model: {}, base url: {})",
                llm_client::MODEL,
                config.openai_base_url
            );
            Some(Arc::new(llm))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; recommendations are disabled until it is configured");
            None
        }
    };

    let state = AppState {
        fetcher: RecommendationFetcher::new(backend),
        renderer: PageRenderer::new()?,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
