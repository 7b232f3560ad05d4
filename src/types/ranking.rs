use serde::{Deserialize, Serialize};

/// Aggregate visit frequency for one URL, derived from the history log.
/// Never persisted; recomputed on every render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWebsite {
    pub url: String,
    pub count: u32,
}

/// A ranked website with its resolved display name, ready for the
/// quick-access dock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockEntry {
    pub url: String,
    pub name: String,
    pub count: u32,
}
