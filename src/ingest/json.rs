//! JSON ingestion
//!
//! Payload shape: `{"rows": [{"id": 1, "text": "..."}, ...]}`.
//! `id` defaults to the 1-based position; a missing or non-string `text`
//! becomes "".

use serde::Deserialize;
use serde_json::Value;

use super::{IngestedRow, RawRecord, RowId};

/// JSON body of an analyze request
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub rows: Vec<Value>,
}

impl AnalyzeRequest {
    pub fn into_rows(self) -> Vec<IngestedRow> {
        self.rows
            .into_iter()
            .enumerate()
            .map(|(index, record)| row_from_record(index + 1, record))
            .collect()
    }
}

/// Permissive entry point: anything that is not `{rows: [...]}` yields no rows
pub fn parse_json_rows(body: &[u8]) -> Vec<IngestedRow> {
    match serde_json::from_slice::<AnalyzeRequest>(body) {
        Ok(request) => request.into_rows(),
        Err(e) => {
            tracing::debug!("Ignoring unusable JSON payload: {}", e);
            Vec::new()
        }
    }
}

fn row_from_record(position: usize, record: Value) -> IngestedRow {
    let id = match record.get("id") {
        Some(id) => RowId::Given(id.clone()),
        None => RowId::Position(position),
    };
    let text = match record.get("text") {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    IngestedRow {
        id,
        text,
        raw: RawRecord::Json(record),
    }
}

// ============================================================================
// TESTS
// ============================================================================
