use std::fmt;

// === StorageError ===

/// Errors related to the local key-value store.
///
/// Corrupt stored JSON is deliberately *not* an error: both managers degrade
/// to an empty collection when a stored value fails to parse.
#[derive(Debug)]
pub enum StorageError {
    /// Reading a value from the store failed.
    ReadFailed(String),
    /// Writing a value to the store failed (e.g. quota or I/O error).
    WriteFailed(String),
    /// Serializing a collection for storage failed.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === CatalogError ===

/// Errors related to catalog loading and management.
#[derive(Debug)]
pub enum CatalogError {
    /// An I/O error occurred while reading or writing the catalog file.
    IoError(String),
    /// The catalog file is not valid JSON.
    ParseError(String),
    /// A category with the same name already exists.
    DuplicateCategory(String),
    /// Category with the given ID was not found.
    CategoryNotFound(i64),
    /// Website with the given ID was not found.
    WebsiteNotFound(i64),
    /// A required field is missing or malformed.
    InvalidInput(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::IoError(msg) => write!(f, "Catalog I/O error: {}", msg),
            CatalogError::ParseError(msg) => write!(f, "Catalog parse error: {}", msg),
            CatalogError::DuplicateCategory(name) => {
                write!(f, "Duplicate category: {}", name)
            }
            CatalogError::CategoryNotFound(id) => write!(f, "Category not found: {}", id),
            CatalogError::WebsiteNotFound(id) => write!(f, "Website not found: {}", id),
            CatalogError::InvalidInput(msg) => write!(f, "Invalid catalog input: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
