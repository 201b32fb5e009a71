//! Recent activity log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationResult, Label};

/// Compact record of one classified row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub label: Label,
}

impl LogEntry {
    pub fn from_result(result: &ClassificationResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            text: result.text.clone(),
            label: result.label,
        }
    }
}
