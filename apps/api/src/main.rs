mod config;
mod errors;
mod routes;
mod scoring;
mod state;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::ScoringEngine;
use crate::state::AppState;
use crate::upload::PdfTextExtractor;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Scorer API v{}", env!("CARGO_PKG_VERSION"));

    // Ensure the upload folder exists when one is configured
    if let Some(dir) = &config.upload_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create upload dir {}", dir.display()))?;
        info!("Temporary uploads in {}", dir.display());
    }

    // Build the scoring engine from the immutable rubric
    let engine = Arc::new(ScoringEngine::english(config.rubric.clone()));
    info!(
        "Rubric loaded: {} keywords, {} matching",
        config.rubric.keywords.len(),
        config.rubric.matching
    );

    let extractor = Arc::new(PdfTextExtractor::new(config.upload_dir.clone()));

    // Build app state
    let state = AppState {
        config: config.clone(),
        engine,
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
