//! CSV ingestion
//!
//! Decoding is two-stage: strict UTF-8 first, then Latin-1 for anything
//! that is not valid UTF-8. The fallback is silent; a bad upload never
//! fails the batch.

use serde_json::Value;

use super::{IngestedRow, RawRecord, RowId};

/// Text column names, highest priority first
pub const TEXT_CANDIDATES: &[&str] = &["text", "message", "post", "content", "body"];

const UTF8_BOM: char = '\u{feff}';

// ============================================================================
// DECODING
// ============================================================================

/// Result of decoding an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Utf8(String),
    /// Input was not valid UTF-8 and was read as Latin-1
    Latin1(String),
}

impl Decoded {
    pub fn into_string(self) -> String {
        match self {
            Decoded::Utf8(s) | Decoded::Latin1(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Latin1(_))
    }
}

/// Strict UTF-8, falling back to Latin-1.
///
/// Latin-1 assigns a char to every byte value, so the fallback cannot fail.
pub fn decode_bytes(bytes: &[u8]) -> Decoded {
    match std::str::from_utf8(bytes) {
        Ok(s) => Decoded::Utf8(s.to_string()),
        Err(_) => Decoded::Latin1(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse CSV bytes with a header row into ingested rows.
///
/// Blank lines are skipped. Short or long rows are tolerated; a record the
/// reader cannot parse at all is dropped with a warning.
pub fn parse_csv(bytes: &[u8]) -> Vec<IngestedRow> {
    let decoded = decode_bytes(bytes);
    if decoded.is_fallback() {
        tracing::debug!("CSV upload is not valid UTF-8, decoded as Latin-1");
    }
    let content = decoded.into_string();
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            tracing::warn!("Unreadable CSV header: {}", e);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let position = index + 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping unreadable CSV record {}: {}", position, e);
                continue;
            }
        };

        let fields: Vec<(String, String)> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();

        rows.push(row_from_fields(position, fields));
    }

    rows
}

fn row_from_fields(position: usize, fields: Vec<(String, String)>) -> IngestedRow {
    let lookup = |name: &str| fields.iter().find(|(h, _)| h == name).map(|(_, v)| v.as_str());

    let text = TEXT_CANDIDATES
        .iter()
        .filter_map(|&c| lookup(c))
        .find(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            tracing::debug!("Row {} has no text column, using first field", position);
            fields.first().map(|(_, v)| v.clone()).unwrap_or_default()
        });

    let id = match lookup("id") {
        Some(id) => RowId::Given(Value::String(id.to_string())),
        None => RowId::Position(position),
    };

    IngestedRow {
        id,
        text,
        raw: RawRecord::Csv(fields),
    }
}

// ============================================================================
// TESTS
// ============================================================================
