//! Ingestion Adapter
//!
//! Turns CSV uploads and JSON payloads into uniform `IngestedRow`s.
//!
//! ## Structure
//! - `csv`: Two-stage decoding and header-driven text column selection
//! - `json`: `{rows: [{id, text}]}` payloads
//! - `sample`: Synthetic CSV datasets for demos and load checks

pub mod csv;
pub mod json;
pub mod sample;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use self::csv::{decode_bytes, parse_csv, Decoded, TEXT_CANDIDATES};
pub use self::json::{parse_json_rows, AnalyzeRequest};

// ============================================================================
// ROW ID
// ============================================================================

/// Row identifier: whatever the caller supplied, or the 1-based row position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Position(usize),
    Given(Value),
}

impl From<usize> for RowId {
    fn from(position: usize) -> Self {
        RowId::Position(position)
    }
}

// ============================================================================
// INGESTED ROW
// ============================================================================

/// Source record a row was built from
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    /// CSV header -> field pairs, in column order
    Csv(Vec<(String, String)>),
    Json(Value),
}

/// One input row ready for classification
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedRow {
    pub id: RowId,
    pub text: String,
    pub raw: RawRecord,
}

impl IngestedRow {
    /// Row built directly from text; the raw record is the text itself
    pub fn new(id: impl Into<RowId>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            raw: RawRecord::Json(Value::String(text.clone())),
            text,
        }
    }
}
