//! Lexicon Scorer / Classifier
//!
//! Deterministic and explainable: score = lexicon hits + structural signals,
//! label by fixed thresholds. Never fails.

use super::normalize::normalize_text;
use super::platform::detect_platforms;
use super::rules::{ClassifierConfig, LabelThresholds};
use super::signals::extract_signals;
use super::types::{ClassificationResult, Label};

/// Suffix appended to truncated report text
const ELLIPSIS: char = '…';

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Snippet classifier configured with swappable lexicons
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config: config.with_lowercase_terms() }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify raw text (normalized here)
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classify_normalized(normalize_text(text))
    }

    fn classify_normalized(&self, text: String) -> ClassificationResult {
        let lexicon = &self.config.lexicon;
        let lowered = text.to_lowercase();

        let risky_hits = count_occurrences(&lowered, &lexicon.risky);
        let safe_hits = count_occurrences(&lowered, &lexicon.safe);
        let base = risky_hits as f64 * lexicon.risky_weight + safe_hits as f64 * lexicon.safe_weight;

        let (signal_score, signals) = extract_signals(&text, &self.config.signals);
        let total = base + signal_score;

        ClassificationResult {
            text: truncate_for_report(&text, self.config.report_text_chars),
            score: round2(total),
            risky_hits,
            safe_hits,
            signals,
            // compare the unrounded score
            label: label_for(total, &self.config.thresholds),
            id: None,
        }
    }

    /// Platforms the text points to
    pub fn detect_platforms(&self, text: &str) -> Vec<&str> {
        detect_platforms(text, &self.config.platforms)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Total non-overlapping occurrences of every term in already-lowered text
pub fn count_occurrences(lowered: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| lowered.matches(t.as_str()).count())
        .sum()
}

/// Threshold a score: `<= safe_max` Safe, `>= suspicious_min` Suspicious, else Neutral
pub fn label_for(score: f64, thresholds: &LabelThresholds) -> Label {
    if score <= thresholds.safe_max {
        Label::Safe
    } else if score < thresholds.suspicious_min {
        Label::Neutral
    } else {
        Label::Suspicious
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn truncate_for_report(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
