//! Key-value storage backends for serialized blobs.
//!
//! # Responsibility
//! - Define the get/set contract the article store persists through.
//! - Provide in-memory and SQLite implementations.
//!
//! # Invariants
//! - Backends store values verbatim; they never parse or rewrite blobs.
//! - `get` on a key that was never set returns `Ok(None)`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryBackend;
pub use sqlite::SqliteBackend;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence medium is unreachable or failed mid-operation.
#[derive(Debug)]
pub enum StorageError {
    /// SQLite rejected a statement or could not be opened.
    Sqlite(rusqlite::Error),
    /// The database was written by a newer build with an unknown layout.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl StorageError {
    /// Stable metadata code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "storage_unavailable",
            Self::UnsupportedSchemaVersion { .. } => "schema_too_new",
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "storage unavailable: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage unavailable: article database version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Blob store addressed by string keys.
pub trait StorageBackend {
    /// Reads the blob stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replaces the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
