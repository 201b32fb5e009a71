//! Platform Detector
//!
//! Matches platform-indicative substrings, independent of scoring.

use super::rules::PlatformRule;

/// Platforms with at least one indicative substring in `text` (case-insensitive).
/// Multiple platforms may match; result follows table order.
pub fn detect_platforms<'a>(text: &str, platforms: &'a [PlatformRule]) -> Vec<&'a str> {
    let lowered = text.to_lowercase();
    platforms
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw.as_str())))
        .map(|rule| rule.name.as_str())
        .collect()
}
