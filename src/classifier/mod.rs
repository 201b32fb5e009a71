//! Classifier Module
//!
//! Labels a snippet SAFE / NEUTRAL / SUSPICIOUS from keyword and
//! surface-pattern signals, and detects which platform it came from.
//!
//! ## Structure
//! - `types`: Label, SignalSet, ClassificationResult
//! - `rules`: Lexicons, weights, thresholds, platform table
//! - `normalize`: Whitespace normalization
//! - `signals`: Structural signal extraction
//! - `platform`: Platform detection
//! - `classifier`: Scoring and labelling
//!
//! ## Usage
//! ```
//! use csv_analyzer::classifier::{Classifier, Label};
//!
//! let classifier = Classifier::default();
//! let result = classifier.classify("Please donate to support the local awareness event");
//! assert_eq!(result.label, Label::Safe);
//! ```

pub mod types;
pub mod rules;
pub mod normalize;
pub mod signals;
pub mod platform;
#[allow(clippy::module_inception)]
pub mod classifier;

pub use types::{ClassificationResult, Label, SignalSet};

pub use rules::{ClassifierConfig, LabelThresholds, Lexicon, PlatformRule, SignalWeights};

pub use normalize::normalize_text;
pub use signals::extract_signals;
pub use platform::detect_platforms;
pub use classifier::{label_for, Classifier};
