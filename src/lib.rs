//! CSV Analyzer
//!
//! Heuristic risk labelling for short social-media snippets.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CSV ANALYZER                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌──────────────┐   ┌────────────────────┐  │
//! │  │  HTTP API  │──▶│  Ingestion   │──▶│  Classifier        │  │
//! │  │  (Axum)    │   │  CSV / JSON  │   │  lexicon + signals │  │
//! │  └─────┬──────┘   └──────────────┘   │  + platforms       │  │
//! │        │                             └─────────┬──────────┘  │
//! │        │          ┌──────────────────┐         │             │
//! │        └─────────▶│  AnalysisStore   │◀────────┘             │
//! │                   │  summary + logs  │                       │
//! │                   └──────────────────┘                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AnalysisStore>,
    pub config: config::Config,
}

pub use store::AnalysisStore;

impl AppState {
    pub fn new(store: AnalysisStore, config: config::Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/stats", get(handlers::stats::stats))
        .route("/logs", get(handlers::logs::logs))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
