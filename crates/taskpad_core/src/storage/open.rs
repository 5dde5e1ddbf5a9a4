//! Connection bootstrap for the key-value store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::StorageResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Opens the on-device store file and applies pending migrations.
///
/// # Side effects
/// - Emits `storage_open` log events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<Connection> {
    open_with(|| Connection::open(path), "file")
}

/// Opens an in-memory store, mainly for tests and smoke probes.
///
/// # Side effects
/// - Emits `storage_open` log events with duration and status.
pub fn open_store_in_memory() -> StorageResult<Connection> {
    open_with(Connection::open_in_memory, "memory")
}

fn open_with(
    open: impl FnOnce() -> rusqlite::Result<Connection>,
    mode: &str,
) -> StorageResult<Connection> {
    let started_at = Instant::now();
    info!("event=storage_open module=storage status=start mode={mode}");

    let result = open().map_err(Into::into).and_then(|mut conn| {
        bootstrap_connection(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}

fn bootstrap_connection(conn: &mut Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    apply_migrations(conn)
}
