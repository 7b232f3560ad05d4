//! Favorites Manager for SiteDock.
//!
//! Implements `FavoritesManagerTrait` — the user-curated bookmark list,
//! independent of visit frequency but sharing the key-value store.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KeyValueStore;
use crate::types::errors::StorageError;
use crate::types::favorite::FavoriteEntry;

/// Storage key for the persisted favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Trait defining favorites operations.
pub trait FavoritesManagerTrait {
    /// Adds a favorite. Returns `Ok(false)` without changing anything when
    /// the URL is already present.
    fn add_favorite(&mut self, url: &str, name: &str) -> Result<bool, StorageError>;
    /// Removes the entry at `index`. An out-of-range index is a no-op.
    fn remove_favorite(&mut self, index: usize) -> Result<(), StorageError>;
    fn list_favorites(&self) -> Vec<FavoriteEntry>;
}

/// Favorites manager backed by the local key-value store.
pub struct FavoritesManager<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> FavoritesManager<'a> {
    /// Creates a new `FavoritesManager` using the provided store.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Loads the persisted list, treating absent or unparseable state as empty.
    fn load(&self) -> Vec<FavoriteEntry> {
        match self.store.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn save(&self, favorites: &[FavoriteEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(favorites)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set_item(FAVORITES_KEY, &json)
    }
}

impl<'a> FavoritesManagerTrait for FavoritesManager<'a> {
    /// Appends `{name, url, timestamp}` unless the URL is already favorited.
    /// Entries stay in insertion order.
    fn add_favorite(&mut self, url: &str, name: &str) -> Result<bool, StorageError> {
        if url.is_empty() {
            return Ok(false);
        }

        let mut favorites = self.load();
        if favorites.iter().any(|f| f.url == url) {
            return Ok(false);
        }

        favorites.push(FavoriteEntry {
            name: name.to_string(),
            url: url.to_string(),
            timestamp: Self::now_millis(),
        });
        self.save(&favorites)?;
        Ok(true)
    }

    /// Removes the entry at `index` and persists the result. The index is
    /// position-based, not URL-based; out of range leaves the list untouched.
    fn remove_favorite(&mut self, index: usize) -> Result<(), StorageError> {
        let mut favorites = self.load();
        if index >= favorites.len() {
            return Ok(());
        }
        favorites.remove(index);
        self.save(&favorites)
    }

    /// Returns the persisted list in insertion order. Absent or corrupt
    /// stored state yields an empty list, never an error.
    fn list_favorites(&self) -> Vec<FavoriteEntry> {
        self.load()
    }
}
