// SiteDock services
// Stateless or file-backed collaborators: the catalog store, the ranking
// engine deriving the quick-access dock, and long-press detection.

pub mod catalog_store;
pub mod long_press;
pub mod ranking_engine;
