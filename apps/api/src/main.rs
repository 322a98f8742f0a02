mod config;
mod errors;
mod extraction;
mod ideas;
mod llm_client;
mod models;
mod routes;
mod shutdown;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, IdeaSource};
use crate::ideas::{CatalogIdeaGenerator, IdeaGenerator, LlmIdeaGenerator};
use crate::llm_client::{CompletionClient, GeminiClient};
use crate::routes::build_router;
use crate::shutdown::shutdown_signal;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillScout v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {config:?}");

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every analysis will fail with an auth error");
    }

    // Initialize LLM client
    let llm: Arc<dyn CompletionClient> = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_base.clone(),
        config.llm_timeout,
    )?);
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.llm_timeout
    );

    // Initialize idea generator (LlmIdeaGenerator by default — swap via IDEA_SOURCE)
    let idea_generator: Arc<dyn IdeaGenerator> = match config.idea_source {
        IdeaSource::Llm => Arc::new(LlmIdeaGenerator::new(llm.clone())),
        IdeaSource::Catalog => Arc::new(CatalogIdeaGenerator),
    };
    info!(
        "Idea generator: {:?}, top_k: {}",
        config.idea_source, config.top_k
    );

    let state = AppState {
        llm,
        config: config.clone(),
        idea_generator,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
