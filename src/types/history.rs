use serde::{Deserialize, Serialize};

/// A single visit event in the history log.
///
/// One record per distinct URL: a repeat visit removes the old record and
/// reinserts a fresh one at the front of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub url: String,
    pub name: String,
    /// Visit time as epoch milliseconds.
    pub timestamp: i64,
    /// Display form of `timestamp` (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub visit_time: String,
}
