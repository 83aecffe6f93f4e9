//! Per-lane record of completed requests

use std::collections::HashMap;

/// A confirmed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub name: String,
    /// The entry's prior count when it was confirmed
    pub prior_count_at_completion: usize,
}

/// Append-only history of confirmed entries for one lane
///
/// Only confirm writes here; the per-name tally backs priority lookups.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
    counts: HashMap<String, usize>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of confirmed requests recorded for `name`
    pub fn count_for(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn append(&mut self, name: &str, prior_count: usize) {
        self.records.push(HistoryRecord {
            name: name.to_string(),
            prior_count_at_completion: prior_count,
        });
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}
