//! Caller-maintained record of past transliterations.
//!
//! Each record keeps the raw input, the output shown to the user and the time
//! of the call. The history is bounded; the oldest records are evicted first.

mod persistence;

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use roman_core::settings::settings;

const MAGIC: &[u8; 4] = b"RUHS";
const VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub input: String,
    pub output: String,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct TransliterationHistory {
    records: VecDeque<HistoryRecord>,
    max_records: usize,
}

/// Flat serialization format for bincode.
#[derive(Serialize, Deserialize)]
struct HistoryData {
    records: Vec<HistoryRecord>,
}

pub fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

impl Default for TransliterationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransliterationHistory {
    /// Empty history bounded by `history.max_records` from the settings.
    pub fn new() -> Self {
        Self::with_max_records(settings().history.max_records)
    }

    /// Empty history bounded by `max_records` (clamped to at least 1).
    pub fn with_max_records(max_records: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_records: max_records.max(1),
        }
    }

    /// Append a record stamped with the current time.
    pub fn record(&mut self, input: &str, output: &str) {
        self.push(HistoryRecord {
            input: input.to_string(),
            output: output.to_string(),
            timestamp: now_epoch(),
        });
    }

    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
        self.evict();
    }

    fn evict(&mut self) {
        while self.records.len() > self.max_records {
            self.records.pop_front();
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }
}
