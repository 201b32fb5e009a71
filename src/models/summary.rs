//! Batch summary model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationResult;

/// Platform name -> integer share of platform hits (percent)
pub type PlatformShares = BTreeMap<String, u32>;

/// Outcome of the most recent analyzed batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub safe: usize,
    pub suspicious: usize,
    pub neutral: usize,
    pub platforms: PlatformShares,
    pub results: Vec<ClassificationResult>,
}

impl Summary {
    /// Zeroed summary with every platform key present
    pub fn empty<'a>(platforms: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            total: 0,
            safe: 0,
            suspicious: 0,
            neutral: 0,
            platforms: platforms.into_iter().map(|p| (p.to_string(), 0)).collect(),
            results: Vec::new(),
        }
    }

    /// Add any missing platform key with a 0 share
    pub fn with_platform_keys<'a>(mut self, platforms: impl IntoIterator<Item = &'a str>) -> Self {
        for name in platforms {
            self.platforms.entry(name.to_string()).or_insert(0);
        }
        self
    }
}

/// Convert raw platform hit counts into integer percentages of all hits.
///
/// With no hits at all every share is 0. Halves round to even.
pub fn platform_shares(counts: &BTreeMap<String, usize>) -> PlatformShares {
    let total: usize = counts.values().sum();
    let denominator = total.max(1) as f64;

    counts
        .iter()
        .map(|(name, &hits)| {
            let pct = (hits as f64 / denominator * 100.0).round_ties_even();
            (name.clone(), pct as u32)
        })
        .collect()
}
