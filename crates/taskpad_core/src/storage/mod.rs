//! Local key-value persistence for the task list.
//!
//! # Responsibility
//! - Open and bootstrap the SQLite-backed key-value store.
//! - Load and save the task-list blob under its fixed key.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - The public load/save contract is total: failures degrade to an
//!   empty list (load) or are logged and swallowed (save).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod gateway;
pub mod migrations;
mod open;

pub use gateway::{TodoStorage, TODOS_STORAGE_KEY};
pub use open::{open_store, open_store_in_memory};

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport and format errors underneath the best-effort contract.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Serde(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "task blob is not valid JSON: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
