//! Classifier Types
//!
//! Result types for snippet classification.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

use crate::ingest::RowId;

// ============================================================================
// LABEL
// ============================================================================

/// Risk label assigned to a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Civic / neutral content, lexicon leans safe
    Safe,
    /// Nothing conclusive either way
    Neutral,
    /// Risky keywords or spam-like structure
    Suspicious,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Safe => "SAFE",
            Label::Neutral => "NEUTRAL",
            Label::Suspicious => "SUSPICIOUS",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SIGNALS
// ============================================================================

/// Structural / stylistic signals found in a snippet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Contains an http:// or https:// link
    pub link: bool,
    /// Raw count of `#` and `@` characters
    pub hashtags: usize,
    /// Three or more consecutive all-caps words
    pub allcaps_streak: bool,
    /// A word immediately repeated
    pub repeat_word: bool,
    /// Longer than the long-post limit
    pub long_post: bool,
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Outcome of classifying one snippet.
///
/// `id` is `None` for direct classify calls and set by the aggregator
/// for rows that came in through ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Normalized text, truncated for reporting
    pub text: String,
    /// Total score rounded to 2 decimals
    pub score: f64,
    pub risky_hits: usize,
    pub safe_hits: usize,
    pub signals: SignalSet,
    pub label: Label,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
}

impl ClassificationResult {
    /// Attach the row identifier
    pub fn with_id(mut self, id: RowId) -> Self {
        self.id = Some(id);
        self
    }
}
