//! CSV Analyzer Server
//!
//! Serves `/health`, `/analyze`, `/stats` and `/logs` over HTTP.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use csv_analyzer::{
    classifier::Classifier,
    config::Config,
    create_router, AnalysisStore, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging (JSON lines in production)
    let json_logs = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "csv_analyzer=debug,tower_http=debug".into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("CSV Analyzer v{} starting...", env!("CARGO_PKG_VERSION"));

    // Classifier tables
    let classifier_config = config.classifier_config()
        .context("Failed to load classifier configuration")?;
    match &config.lexicon_path {
        Some(path) => tracing::info!("Lexicon loaded from {}", path),
        None => tracing::info!("Using built-in lexicon"),
    }
    tracing::info!(
        risky_terms = classifier_config.lexicon.risky.len(),
        safe_terms = classifier_config.lexicon.safe.len(),
        platforms = classifier_config.platforms.len(),
        "Classifier ready"
    );

    // Build application state
    let store = AnalysisStore::new(Classifier::new(classifier_config), config.max_logs);
    let state = AppState::new(store, config.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await
        .context("Server error")?;

    Ok(())
}
