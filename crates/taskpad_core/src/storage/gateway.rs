//! Task-list blob gateway over the key-value store.
//!
//! # Responsibility
//! - Serialize the full task list to JSON under one fixed key.
//! - Shield callers from storage failures per the best-effort contract.
//!
//! # Invariants
//! - `load` never fails: missing key, transport and parse errors all
//!   degrade to an empty list with a logged warning.
//! - `save` overwrites the whole blob; failures are logged, not raised.

use crate::model::todo::Todo;
use crate::storage::StorageResult;
use log::{error, warn};
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed key the task-list blob lives under. Matches the key the
/// original app used, so existing data carries over.
pub const TODOS_STORAGE_KEY: &str = "@todos_v2";

/// Load/save gateway bound to one open store connection.
pub struct TodoStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> TodoStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Loads the persisted list, degrading every failure to empty.
    ///
    /// Absence of the key is the normal first-run case and logs at
    /// debug; transport and parse failures log a warning.
    pub fn load(&self) -> Vec<Todo> {
        match self.try_load() {
            Ok(Some(todos)) => todos,
            Ok(None) => {
                log::debug!("event=todos_load module=storage status=ok result=empty");
                Vec::new()
            }
            Err(err) => {
                warn!("event=todos_load module=storage status=error fallback=empty error={err}");
                Vec::new()
            }
        }
    }

    /// Persists the full list, swallowing and logging any failure.
    ///
    /// The in-memory list stays authoritative for the session even when
    /// the persisted copy goes stale.
    pub fn save(&self, todos: &[Todo]) {
        if let Err(err) = self.try_save(todos) {
            error!(
                "event=todos_save module=storage status=error count={} error={err}",
                todos.len()
            );
        }
    }

    /// Fallible load: `None` when the key has never been written.
    pub fn try_load(&self) -> StorageResult<Option<Vec<Todo>>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [TODOS_STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Fallible save: serializes and upserts the blob wholesale.
    pub fn try_save(&self, todos: &[Todo]) -> StorageResult<()> {
        let blob = serde_json::to_string(todos)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TODOS_STORAGE_KEY, blob],
        )?;
        Ok(())
    }
}
