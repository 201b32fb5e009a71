//! Classification Rules, Lexicons & Thresholds
//!
//! Keyword lexicons, weights and label thresholds.
//! No classify logic here - constants and config only.

use serde::{Deserialize, Serialize};

// ============================================================================
// LEXICONS (defaults)
// ============================================================================

/// Incitement, disinformation and scam patterns
pub const RISKY_KEYWORDS: &[&str] = &[
    "boycott", "hate", "genocide", "terror", "traitor", "anti-india", "anti india",
    "separatist", "attack", "riot", "fake news", "propaganda", "kill", "burn",
    "target", "spam", "troll farm", "bot network", "phishing", "scam", "giveaway",
    "win iphone", "free crypto", "login to claim",
];

/// Civic / neutral content
pub const SAFE_KEYWORDS: &[&str] = &[
    "education", "research", "awareness", "help", "support", "donate", "neutral",
    "balanced", "fact-check", "informative", "clarification", "community", "event",
    "job", "weather", "update", "review", "positive",
];

/// Platform name -> indicative lowercase substrings
pub const PLATFORM_KEYWORDS: &[(&str, &[&str])] = &[
    ("Twitter", &["twitter", "tweet", "x "]),
    ("Facebook", &["facebook", "fb"]),
    ("Instagram", &["instagram", "insta"]),
    ("Reddit", &["reddit", "r/"]),
    ("LinkedIn", &["linkedin"]),
    ("YouTube", &["youtube", "youtu.be"]),
];

// ============================================================================
// WEIGHTS
// ============================================================================

/// Per occurrence of a risky term
pub const W_RISKY: f64 = 2.0;
/// Per occurrence of a safe term
pub const W_SAFE: f64 = -1.0;

pub const W_HAS_LINK: f64 = 1.5;
pub const W_MANY_HASHTAGS: f64 = 1.0;
pub const W_ALLCAPS_STREAK: f64 = 1.0;
pub const W_REPEAT_WORD: f64 = 0.5;
pub const W_LONG_POST: f64 = 0.5;

/// `#`/`@` count at which the hashtag signal fires
pub const HASHTAG_MIN: usize = 3;

/// Character count above which a post is long
pub const LONG_POST_CHARS: usize = 280;

/// Reported text is cut to this many characters
pub const REPORT_TEXT_CHARS: usize = 200;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// At or below this score = Safe
pub const SAFE_THRESHOLD: f64 = -0.5;

/// At or above this score = Suspicious, between = Neutral
pub const SUSPICIOUS_THRESHOLD: f64 = 1.5;

// ============================================================================
// CONFIGURABLE TABLES (loadable from a lexicon file)
// ============================================================================

/// Keyword lists and their per-occurrence weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub risky: Vec<String>,
    pub safe: Vec<String>,
    pub risky_weight: f64,
    pub safe_weight: f64,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            risky: RISKY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            safe: SAFE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            risky_weight: W_RISKY,
            safe_weight: W_SAFE,
        }
    }
}

/// Score contribution of each structural signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub link: f64,
    pub many_hashtags: f64,
    pub allcaps_streak: f64,
    pub repeat_word: f64,
    pub long_post: f64,
    pub hashtag_min: usize,
    pub long_post_chars: usize,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            link: W_HAS_LINK,
            many_hashtags: W_MANY_HASHTAGS,
            allcaps_streak: W_ALLCAPS_STREAK,
            repeat_word: W_REPEAT_WORD,
            long_post: W_LONG_POST,
            hashtag_min: HASHTAG_MIN,
            long_post_chars: LONG_POST_CHARS,
        }
    }
}

/// Label thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelThresholds {
    /// score <= safe_max -> Safe
    pub safe_max: f64,
    /// score >= suspicious_min -> Suspicious
    pub suspicious_min: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            safe_max: SAFE_THRESHOLD,
            suspicious_min: SUSPICIOUS_THRESHOLD,
        }
    }
}

/// One platform and the substrings that point to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRule {
    pub name: String,
    pub keywords: Vec<String>,
}

pub fn default_platforms() -> Vec<PlatformRule> {
    PLATFORM_KEYWORDS
        .iter()
        .map(|(name, keywords)| PlatformRule {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

/// Full classifier configuration.
///
/// Every field is optional in a lexicon file; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub lexicon: Lexicon,
    pub signals: SignalWeights,
    pub thresholds: LabelThresholds,
    pub platforms: Vec<PlatformRule>,
    pub report_text_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::default(),
            signals: SignalWeights::default(),
            thresholds: LabelThresholds::default(),
            platforms: default_platforms(),
            report_text_chars: REPORT_TEXT_CHARS,
        }
    }
}

impl ClassifierConfig {
    /// Platform names in table order
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.name.as_str())
    }

    /// Lowercase every lexicon term and platform keyword; matching runs on lowered text
    pub fn with_lowercase_terms(mut self) -> Self {
        let terms = self
            .lexicon
            .risky
            .iter_mut()
            .chain(self.lexicon.safe.iter_mut())
            .chain(self.platforms.iter_mut().flat_map(|p| p.keywords.iter_mut()));
        for term in terms {
            *term = term.to_lowercase();
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
