//! Signal Extractor
//!
//! Structural / stylistic risk signals over normalized text.
//! Each rule is independent and additive; order does not matter.
//!
//! The all-caps and repeated-word heuristics are matched literally; the
//! thresholds are tuned against them (a single 12-letter caps run counts
//! as a streak).

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::SignalWeights;
use super::types::SignalSet;

// ============================================================================
// COMPILED PATTERNS
// ============================================================================

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://").unwrap());

static ALLCAPS_STREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]{4,}\s*){3,}").unwrap());

// letters, digits and underscore; combining marks split words
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

// ============================================================================
// INDIVIDUAL CHECKS
// ============================================================================

pub fn has_link(text: &str) -> bool {
    LINK_RE.is_match(text)
}

/// Count of `#` and `@` anywhere in the text
pub fn hashtag_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '#' | '@')).count()
}

pub fn has_allcaps_streak(text: &str) -> bool {
    ALLCAPS_STREAK_RE.is_match(text)
}

/// A word followed, across whitespace only, by the same word (case-insensitive)
pub fn has_repeated_word(text: &str) -> bool {
    let mut prev: Option<regex::Match> = None;
    for word in WORD_RE.find_iter(text) {
        if let Some(p) = prev {
            let gap = &text[p.end()..word.start()];
            if gap.chars().all(char::is_whitespace)
                && p.as_str().to_lowercase() == word.as_str().to_lowercase()
            {
                return true;
            }
        }
        prev = Some(word);
    }
    false
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Run every signal check. Returns (score contribution, signals).
pub fn extract_signals(text: &str, weights: &SignalWeights) -> (f64, SignalSet) {
    let mut score = 0.0;
    let mut signals = SignalSet::default();

    if has_link(text) {
        score += weights.link;
        signals.link = true;
    }

    signals.hashtags = hashtag_count(text);
    if signals.hashtags >= weights.hashtag_min {
        score += weights.many_hashtags;
    }

    if has_allcaps_streak(text) {
        score += weights.allcaps_streak;
        signals.allcaps_streak = true;
    }

    if has_repeated_word(text) {
        score += weights.repeat_word;
        signals.repeat_word = true;
    }

    if text.chars().count() > weights.long_post_chars {
        score += weights.long_post;
        signals.long_post = true;
    }

    (score, signals)
}

// ============================================================================
// TESTS
// ============================================================================
