//! Analysis Store - Aggregator and recent-activity log
//!
//! Owns the last batch summary and a bounded FIFO log of classified rows.
//! Built once at startup and shared through `AppState`.
//!
//! Classification is pure and runs before the lock is taken. Stamping and
//! appending log entries, truncating the log and replacing the summary happen
//! under a single write guard, so readers see a batch either fully applied or
//! not at all and log timestamps never go backwards.

use std::collections::{BTreeMap, VecDeque};

use chrono::Utc;
use parking_lot::RwLock;

use crate::classifier::{ClassificationResult, Classifier, Label};
use crate::error::AnalyzeError;
use crate::ingest::IngestedRow;
use crate::models::{platform_shares, LogEntry, Summary};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum retained log entries
pub const MAX_LOGS: usize = 200;

/// Entries returned by a logs query
pub const LOGS_PAGE_SIZE: usize = 100;

// ============================================================================
// STATE
// ============================================================================

#[derive(Debug, Default)]
struct StoreState {
    summary: Option<Summary>,
    logs: VecDeque<LogEntry>,
}

// ============================================================================
// BATCH TALLY
// ============================================================================

/// Counters for one batch, built before any shared state is touched
struct BatchTally {
    safe: usize,
    suspicious: usize,
    neutral: usize,
    platform_hits: BTreeMap<String, usize>,
    results: Vec<ClassificationResult>,
}

impl BatchTally {
    fn new(classifier: &Classifier, capacity: usize) -> Self {
        Self {
            safe: 0,
            suspicious: 0,
            neutral: 0,
            platform_hits: classifier
                .config()
                .platform_names()
                .map(|p| (p.to_string(), 0))
                .collect(),
            results: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, classifier: &Classifier, row: IngestedRow) {
        let result = classifier.classify(&row.text);

        match result.label {
            Label::Safe => self.safe += 1,
            Label::Suspicious => self.suspicious += 1,
            Label::Neutral => self.neutral += 1,
        }

        for platform in classifier.detect_platforms(&row.text) {
            *self.platform_hits.entry(platform.to_string()).or_insert(0) += 1;
        }

        self.results.push(result.with_id(row.id));
    }

    fn into_summary(self) -> Summary {
        Summary {
            total: self.safe + self.suspicious + self.neutral,
            safe: self.safe,
            suspicious: self.suspicious,
            neutral: self.neutral,
            platforms: platform_shares(&self.platform_hits),
            results: self.results,
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Shared aggregation state for the service
#[derive(Debug)]
pub struct AnalysisStore {
    classifier: Classifier,
    max_logs: usize,
    state: RwLock<StoreState>,
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new(Classifier::default(), MAX_LOGS)
    }
}

impl AnalysisStore {
    pub fn new(classifier: Classifier, max_logs: usize) -> Self {
        Self {
            classifier,
            max_logs,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Classify a batch, append it to the log and make it the current summary.
    ///
    /// An empty batch is rejected and leaves state untouched.
    pub fn analyze(&self, rows: Vec<IngestedRow>) -> Result<Summary, AnalyzeError> {
        if rows.is_empty() {
            return Err(AnalyzeError::InputEmpty);
        }

        let mut tally = BatchTally::new(&self.classifier, rows.len());
        for row in rows {
            tally.record(&self.classifier, row);
        }
        let summary = tally.into_summary();

        {
            let mut state = self.state.write();
            let now = Utc::now();
            state
                .logs
                .extend(summary.results.iter().map(|r| LogEntry::from_result(r, now)));
            let excess = state.logs.len().saturating_sub(self.max_logs);
            state.logs.drain(..excess);
            state.summary = Some(summary.clone());
        }

        tracing::info!(
            total = summary.total,
            safe = summary.safe,
            suspicious = summary.suspicious,
            neutral = summary.neutral,
            "Batch analyzed"
        );

        Ok(summary)
    }

    /// Current summary with every platform key present; zeroed before the first batch
    pub fn stats(&self) -> Summary {
        let names = self.classifier.config().platform_names();
        match &self.state.read().summary {
            Some(summary) => summary.clone().with_platform_keys(names),
            None => Summary::empty(names),
        }
    }

    /// Up to `limit` most recent entries, oldest first
    pub fn recent_logs(&self, limit: usize) -> Vec<LogEntry> {
        let state = self.state.read();
        let skip = state.logs.len().saturating_sub(limit);
        state.logs.iter().skip(skip).cloned().collect()
    }

    /// Number of retained log entries
    pub fn log_len(&self) -> usize {
        self.state.read().logs.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::RowId;
    use std::sync::Arc;

    fn rows(texts: &[&str]) -> Vec<IngestedRow> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| IngestedRow::new(i + 1, *t))
            .collect()
    }

    #[test]
    fn test_plain_batch_is_all_neutral() {
        let store = AnalysisStore::default();
        let summary = store.analyze(rows(&["one thing", "another thing", "third thing"])).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.safe, 0);
        assert_eq!(summary.suspicious, 0);
        assert_eq!(summary.neutral, 3);
        assert!(summary.platforms.values().all(|&v| v == 0));
    }

    #[test]
    fn test_results_keep_order_and_ids() {
        let store = AnalysisStore::default();
        let summary = store
            .analyze(rows(&["scam scam", "community help", "hello"]))
            .unwrap();
        let ids: Vec<_> = summary.results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![Some(RowId::Position(1)), Some(RowId::Position(2)), Some(RowId::Position(3))]);
        assert_eq!(summary.results[0].label, Label::Suspicious);
        assert_eq!(summary.results[1].label, Label::Safe);
        assert_eq!(summary.results[2].label, Label::Neutral);
    }

    #[test]
    fn test_multi_platform_row_counts_for_each() {
        let store = AnalysisStore::default();
        let summary = store
            .analyze(rows(&["from reddit to youtube", "reddit again", "nothing"]))
            .unwrap();
        // Reddit 2 hits, YouTube 1 hit
        assert_eq!(summary.platforms["Reddit"], 67);
        assert_eq!(summary.platforms["YouTube"], 33);
        assert_eq!(summary.platforms["Twitter"], 0);
        assert_eq!(summary.platforms.values().sum::<u32>(), 100);
    }

    #[test]
    fn test_summary_is_replaced_not_merged() {
        let store = AnalysisStore::default();
        store.analyze(rows(&["a", "b", "c", "d"])).unwrap();
        let summary = store.analyze(rows(&["scam"])).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(store.stats(), summary);
        assert_eq!(store.log_len(), 5);
    }

    #[test]
    fn test_empty_batch_leaves_state_untouched() {
        let store = AnalysisStore::default();
        let before = store.analyze(rows(&["hello"])).unwrap();
        assert_eq!(store.analyze(Vec::new()), Err(AnalyzeError::InputEmpty));
        assert_eq!(store.stats(), before);
        assert_eq!(store.log_len(), 1);
    }

    #[test]
    fn test_stats_before_any_batch() {
        let store = AnalysisStore::default();
        let stats = store.stats();
        assert_eq!(stats.total, 0);
        assert!(stats.results.is_empty());
        assert_eq!(stats.platforms.len(), 6);
        assert!(stats.platforms.values().all(|&v| v == 0));
    }

    #[test]
    fn test_log_is_bounded_fifo() {
        let store = AnalysisStore::default();
        for batch in 0..5 {
            let texts: Vec<String> = (0..60).map(|i| format!("batch{} row{}", batch, i)).collect();
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            store.analyze(rows(&refs)).unwrap();
            assert!(store.log_len() <= MAX_LOGS);
        }
        assert_eq!(store.log_len(), MAX_LOGS);

        // 300 appended, the first 100 dropped
        let all = store.recent_logs(MAX_LOGS);
        assert_eq!(all.first().unwrap().text, "batch1 row40");
        assert_eq!(all.last().unwrap().text, "batch4 row59");
    }

    #[test]
    fn test_recent_logs_window() {
        let store = AnalysisStore::default();
        let texts: Vec<String> = (0..150).map(|i| format!("row{}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        store.analyze(rows(&refs)).unwrap();

        let logs = store.recent_logs(LOGS_PAGE_SIZE);
        assert_eq!(logs.len(), 100);
        assert_eq!(logs[0].text, "row50");
        assert_eq!(logs[99].text, "row149");
        assert!(logs.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_batch_is_stamped_once() {
        let store = AnalysisStore::default();
        store.analyze(rows(&["a", "b", "c"])).unwrap();
        store.analyze(rows(&["d"])).unwrap();
        let logs = store.recent_logs(10);
        assert!(logs[..3].iter().all(|e| e.timestamp == logs[0].timestamp));
        assert!(logs[3].timestamp >= logs[2].timestamp);
    }

    #[test]
    fn test_custom_log_cap() {
        let store = AnalysisStore::new(Classifier::default(), 3);
        store.analyze(rows(&["a", "b", "c", "d", "e"])).unwrap();
        let logs = store.recent_logs(10);
        let texts: Vec<_> = logs.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_concurrent_batches_do_not_interleave() {
        let store = Arc::new(AnalysisStore::default());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let texts: Vec<String> = (0..20).map(|i| format!("t{} r{}", t, i)).collect();
                    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
                    store.analyze(rows(&refs)).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.log_len(), 160);
        assert_eq!(store.stats().total, 20);

        // stamped in append order
        let logs = store.recent_logs(MAX_LOGS);
        assert!(logs.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        // every batch's 20 entries must be contiguous
        for chunk in logs.chunks(20) {
            let prefix = chunk[0].text.split(' ').next().unwrap().to_string();
            assert!(chunk.iter().all(|e| e.text.starts_with(&format!("{} ", prefix))));
        }
    }
}
