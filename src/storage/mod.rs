//! SiteDock storage layer.
//!
//! Provides the local key-value store (SQLite-backed) and its schema
//! migrations. The store mirrors the Web Storage API surface the original
//! directory ran on: string keys, string values, whole-value replacement.
//!
//! # Usage
//!
//! ```no_run
//! use sitedock::storage::LocalStore;
//!
//! // Open a persistent store
//! let store = LocalStore::open("sitedock.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = LocalStore::open_in_memory().expect("failed to open in-memory store");
//! ```

pub mod local_store;
pub mod migrations;

pub use local_store::{KeyValueStore, LocalStore};
