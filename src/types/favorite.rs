use serde::{Deserialize, Serialize};

/// A user-curated bookmark. At most one entry per URL; kept in insertion
/// order and never auto-expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub name: String,
    pub url: String,
    /// Epoch milliseconds at which the entry was added.
    pub timestamp: i64,
}
