//! SQLite-backed local key-value store for SiteDock.
//!
//! Provides the [`LocalStore`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open, plus the
//! [`KeyValueStore`] capability trait that the managers depend on.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::migrations;
use crate::types::errors::StorageError;

/// Capability trait for the local key-value store.
///
/// Modeled on the Web Storage API (`getItem`/`setItem`/`removeItem`): string
/// keys, string values, whole-value replacement on every write. Managers
/// depend on this trait rather than the concrete store so tests can inject
/// failing or pre-seeded implementations.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Key-value store backed by a SQLite database.
///
/// The `LocalStore` owns a `rusqlite::Connection` and ensures the `kv_store`
/// table exists when the store is opened. Both persisted collections
/// (`visitHistory`, `favorites`) live under distinct keys in this table;
/// no cross-key transaction is needed since each component only ever
/// touches its own key.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (or creates) a store at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or
    /// migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory store and runs migrations.
    ///
    /// Useful for testing — the store is discarded when the `LocalStore`
    /// is dropped.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or
    /// migrations fail.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KeyValueStore for LocalStore {
    /// Returns the stored value for `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::ReadFailed(e.to_string()))
    }

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    /// Removes `key` from the store. Removing an absent key is a no-op.
    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
