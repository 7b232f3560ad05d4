//! App Core for SiteDock.
//!
//! Central struct holding the local store and the catalog, exposing the
//! user-action entry points the presentation layer calls. Replaces the
//! original's global mutable module state with an owned context and an
//! explicit constructor.

use crate::managers::favorites_manager::{FavoritesManager, FavoritesManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::catalog_store::{CatalogStore, CatalogStoreTrait};
use crate::services::ranking_engine;
use crate::storage::LocalStore;
use crate::types::favorite::FavoriteEntry;
use crate::types::history::VisitRecord;
use crate::types::notice::Notice;
use crate::types::ranking::DockEntry;

/// Number of entries shown in the quick-access dock.
pub const DOCK_SIZE: usize = 4;

/// Result of a visit action: the recomputed dock, plus a notice when
/// persistence failed. The explicit return replaces the original's implicit
/// re-render side effect inside the history log.
#[derive(Debug)]
pub struct VisitOutcome {
    pub dock: Vec<DockEntry>,
    pub notice: Option<Notice>,
}

/// Central application context.
///
/// Managers are created on demand over `&store` because they borrow the
/// store with a lifetime parameter.
pub struct App {
    store: LocalStore,
    catalog: CatalogStore,
}

impl App {
    /// Creates a new App over a persistent store and the catalog data file.
    ///
    /// A missing or malformed catalog file degrades to an empty catalog;
    /// name resolution then falls back to URL hosts.
    pub fn new(db_path: &str, data_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store = LocalStore::open(db_path)?;
        Ok(Self::with_store(store, data_path))
    }

    /// Creates a new App over an in-memory store. Useful for testing.
    pub fn open_in_memory(data_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store = LocalStore::open_in_memory()?;
        Ok(Self::with_store(store, data_path))
    }

    fn with_store(store: LocalStore, data_path: &str) -> Self {
        let mut catalog = CatalogStore::new(data_path);
        let _ = catalog.load();
        Self { store, catalog }
    }

    /// Returns the catalog store, e.g. for search or the management UI.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable access to the catalog store for management operations.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// Records a visit to `url` and returns the refreshed dock.
    ///
    /// The display name is resolved from the catalog (falling back to the
    /// URL host). A persistence failure is reported as an error notice and
    /// never panics; the dock is then derived from whatever state is
    /// actually durable.
    pub fn visit(&self, url: &str) -> VisitOutcome {
        let name = ranking_engine::resolve_display_name(self.catalog.catalog(), url);
        let mut history = HistoryManager::new(&self.store);

        match history.record_visit(url, &name) {
            Ok(log) => VisitOutcome {
                dock: ranking_engine::dock_entries(self.catalog.catalog(), &log, DOCK_SIZE),
                notice: None,
            },
            Err(e) => VisitOutcome {
                dock: ranking_engine::dock_entries(
                    self.catalog.catalog(),
                    &history.list_history(),
                    DOCK_SIZE,
                ),
                notice: Some(Notice::error(format!("Failed to save visit history: {}", e))),
            },
        }
    }

    /// Returns the current quick-access dock. Empty when there is no
    /// history; the renderer hides the section rather than show an empty
    /// container.
    pub fn dock(&self) -> Vec<DockEntry> {
        let history = HistoryManager::new(&self.store);
        ranking_engine::dock_entries(self.catalog.catalog(), &history.list_history(), DOCK_SIZE)
    }

    /// Returns the visit history, most-recent-first.
    pub fn history(&self) -> Vec<VisitRecord> {
        HistoryManager::new(&self.store).list_history()
    }

    /// Clears the visit history. Returns an error notice on failure.
    pub fn clear_history(&self) -> Option<Notice> {
        let mut history = HistoryManager::new(&self.store);
        match history.clear_all() {
            Ok(()) => None,
            Err(e) => Some(Notice::error(format!("Failed to clear history: {}", e))),
        }
    }

    /// Adds `url` to the favorites list, resolving its display name from
    /// the catalog. Always yields a notice: added, already present, or a
    /// persistence error.
    pub fn add_favorite(&self, url: &str) -> Notice {
        let name = ranking_engine::resolve_display_name(self.catalog.catalog(), url);
        let mut favorites = FavoritesManager::new(&self.store);
        match favorites.add_favorite(url, &name) {
            Ok(true) => Notice::success("Added to favorites"),
            Ok(false) => Notice::info("Already in favorites"),
            Err(e) => Notice::error(format!("Failed to save favorite: {}", e)),
        }
    }

    /// Removes the favorite at `index`. Out of range is a silent no-op;
    /// only a persistence failure produces a notice.
    pub fn remove_favorite(&self, index: usize) -> Option<Notice> {
        let mut favorites = FavoritesManager::new(&self.store);
        match favorites.remove_favorite(index) {
            Ok(()) => None,
            Err(e) => Some(Notice::error(format!("Failed to remove favorite: {}", e))),
        }
    }

    /// Returns the favorites list in insertion order.
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        FavoritesManager::new(&self.store).list_favorites()
    }
}
