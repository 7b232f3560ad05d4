//! History Manager for SiteDock.
//!
//! Implements `HistoryManagerTrait` — maintaining a bounded, deduplicated,
//! recency-ordered log of site visits in the local key-value store.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KeyValueStore;
use crate::types::errors::StorageError;
use crate::types::history::VisitRecord;

/// Storage key for the persisted history log.
pub const HISTORY_KEY: &str = "visitHistory";

/// Hard cap on the number of retained history records.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Trait defining history log operations.
pub trait HistoryManagerTrait {
    /// Records a visit and returns the updated log, most-recent-first.
    fn record_visit(&mut self, url: &str, name: &str) -> Result<Vec<VisitRecord>, StorageError>;
    fn list_history(&self) -> Vec<VisitRecord>;
    fn clear_all(&mut self) -> Result<(), StorageError>;
}

/// History manager backed by the local key-value store.
pub struct HistoryManager<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` using the provided store.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Loads the persisted log, treating absent or unparseable state as empty.
    fn load(&self) -> Vec<VisitRecord> {
        match self.store.get_item(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn save(&self, log: &[VisitRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(log)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set_item(HISTORY_KEY, &json)
    }
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a visit: removes any existing record for the URL, inserts a
    /// fresh record at the front, truncates to [`MAX_HISTORY_ENTRIES`], and
    /// persists the full log. An empty `url` is a silent no-op.
    ///
    /// Returns the updated log so the caller can refresh the dock without
    /// this component knowing anything about rendering.
    fn record_visit(&mut self, url: &str, name: &str) -> Result<Vec<VisitRecord>, StorageError> {
        let mut log = self.load();
        if url.is_empty() {
            return Ok(log);
        }

        let timestamp = Self::now_millis();
        let record = VisitRecord {
            url: url.to_string(),
            name: name.to_string(),
            timestamp,
            visit_time: format_display_time(timestamp),
        };

        apply_visit(&mut log, record);
        self.save(&log)?;
        Ok(log)
    }

    /// Returns the persisted log, most-recent-first. Absent or corrupt
    /// stored state yields an empty log, never an error.
    fn list_history(&self) -> Vec<VisitRecord> {
        self.load()
    }

    /// Removes all history records.
    fn clear_all(&mut self) -> Result<(), StorageError> {
        self.store.remove_item(HISTORY_KEY)
    }
}

/// Applies one visit to the log: removes any existing record for the URL,
/// inserts the new record at the front, and trims to the cap. Pure over the
/// log; relative order of the other entries is preserved.
pub fn apply_visit(log: &mut Vec<VisitRecord>, record: VisitRecord) {
    log.retain(|r| r.url != record.url);
    log.insert(0, record);
    log.truncate(MAX_HISTORY_ENTRIES);
}

/// Checks the log invariants: bounded length and at most one record per URL.
pub fn log_is_well_formed(log: &[VisitRecord]) -> bool {
    if log.len() > MAX_HISTORY_ENTRIES {
        return false;
    }
    let mut seen = HashSet::new();
    log.iter().all(|r| seen.insert(r.url.as_str()))
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn format_display_time(millis: i64) -> String {
    let secs = millis.div_euclid(1000);
    let days = secs.div_euclid(86400);
    let rem = secs.rem_euclid(86400);
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        rem / 3600,
        (rem / 60) % 60,
        rem % 60
    )
}

/// Converts days since the UNIX epoch to a (year, month, day) civil date.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}
