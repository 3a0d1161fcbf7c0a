use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interviewer::config::Config;
use interviewer::llm_client::{self, TextGenerator, WorkersAiClient};
use interviewer::routes::build_router;
use interviewer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interviewer API v{}", env!("CARGO_PKG_VERSION"));

    // A missing binding does not stop the server; requests fail fast instead.
    let generator: Option<Arc<dyn TextGenerator>> = match &config.gateway {
        Some(gateway) => {
            let client: Arc<dyn TextGenerator> = Arc::new(WorkersAiClient::new(gateway)?);
            info!(
                "LLM client initialized (model: {}, gateway: {})",
                llm_client::MODEL,
                gateway.gateway_id
            );
            Some(client)
        }
        None => {
            warn!("Gateway bindings not set; /api/interviewer will return errors");
            None
        }
    };

    let state = AppState { generator };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
