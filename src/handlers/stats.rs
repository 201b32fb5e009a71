//! Stats handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use crate::models::Summary;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Last batch summary, zeroed if nothing has been analyzed yet
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        ok: true,
        summary: state.store.stats(),
    })
}
