//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

// ============================================================================
// CORE ERRORS
// ============================================================================

/// Batch analysis failures. State is never touched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("No data provided. Upload CSV as 'file' or JSON {{rows:[...]}}")]
    InputEmpty,
}

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read lexicon file {path}: {source}")]
    LexiconRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon file {path}: {source}")]
    LexiconParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// HTTP ERRORS
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    // Input errors
    InputEmpty,
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InputEmpty => {
                tracing::warn!("Rejected analyze request with no rows");
                (StatusCode::BAD_REQUEST, AnalyzeError::InputEmpty.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "ok": false,
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<AnalyzeError> for AppError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::InputEmpty => AppError::InputEmpty,
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
