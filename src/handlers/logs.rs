//! Recent logs handler

use axum::{extract::{Query, State}, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::models::LogEntry;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub ok: bool,
    pub logs: Vec<LogEntry>,
}

/// Most recent entries, oldest first. `limit` can only shrink the page.
pub async fn logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<LogsResponse> {
    let page = state.config.logs_page_size;
    let limit = query.limit.unwrap_or(page).min(page);

    Json(LogsResponse {
        ok: true,
        logs: state.store.recent_logs(limit),
    })
}
