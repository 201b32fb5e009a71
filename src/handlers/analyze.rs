//! Analyze handler
//!
//! Accepts a multipart upload (`file` part), a raw `text/csv` body, or
//! JSON `{rows: [...]}`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::Serialize;

use crate::{AppState, AppError, AppResult};
use crate::ingest::{parse_csv, parse_json_rows, IngestedRow};
use crate::models::Summary;

/// Multipart part holding the CSV upload
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub ok: bool,
    pub summary: Summary,
}

/// Ingest the request body and analyze it as one batch
pub async fn analyze(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Json<AnalyzeResponse>> {
    let rows = match body_kind(request.headers()) {
        BodyKind::Multipart => {
            let multipart = Multipart::from_request(request, &state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            rows_from_multipart(multipart).await?
        }
        BodyKind::Csv => parse_csv(&read_body(request, &state).await?),
        BodyKind::Json => parse_json_rows(&read_body(request, &state).await?),
    };

    let summary = state.store.analyze(rows)?;

    Ok(Json(AnalyzeResponse { ok: true, summary }))
}

enum BodyKind {
    Multipart,
    Csv,
    Json,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if content_type.starts_with("text/csv") {
        BodyKind::Csv
    } else {
        BodyKind::Json
    }
}

async fn read_body(request: Request, state: &AppState) -> AppResult<Bytes> {
    Bytes::from_request(request, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// CSV rows from the `file` part; no such part means no rows
async fn rows_from_multipart(mut multipart: Multipart) -> AppResult<Vec<IngestedRow>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field.bytes().await?;
            tracing::debug!("Received CSV upload of {} bytes", bytes.len());
            return Ok(parse_csv(&bytes));
        }
    }
    Ok(Vec::new())
}
