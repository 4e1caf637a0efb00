//! ICP Checker Web Server
//!
//! Run with: cargo run -p icp-web --bin icp-checker

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use icp_web::config::Config;
use icp_web::router::build_router;
use icp_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting ICP checker v{}", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => warn!("No config file found, using defaults"),
    }

    let state = AppState::new(config.classifier.clone())
        .context("Failed to build classifier")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?;
    info!("🚀 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
