//! Health check handler

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "csv-analyzer";

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
