// SiteDock data types
// Serde-serializable structs for the catalog, history log, favorites, and
// derived rankings, plus the per-component error enums.

pub mod catalog;
pub mod errors;
pub mod favorite;
pub mod history;
pub mod notice;
pub mod ranking;
