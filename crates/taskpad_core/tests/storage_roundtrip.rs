use rusqlite::params;
use taskpad_core::storage::migrations::latest_version;
use taskpad_core::{
    open_store, open_store_in_memory, Priority, StorageError, Todo, TodoStorage, TODOS_STORAGE_KEY,
};

fn sample_todos() -> Vec<Todo> {
    let mut done = Todo::with_id(
        "t-2".to_string(),
        "already finished",
        Priority::High,
        1_700_000_000_000,
        1_700_000_900_000,
    )
    .unwrap();
    done.done = true;

    vec![
        Todo::with_id(
            "t-1".to_string(),
            "still open",
            Priority::Medium,
            1_700_000_100_000,
            1_700_000_100_000,
        )
        .unwrap(),
        done,
    ]
}

#[test]
fn save_then_load_roundtrips_field_for_field() {
    let conn = open_store_in_memory().unwrap();
    let storage = TodoStorage::new(&conn);

    let todos = sample_todos();
    storage.try_save(&todos).unwrap();

    let loaded = storage.load();
    assert_eq!(loaded, todos);
}

#[test]
fn load_with_no_prior_data_yields_empty_list() {
    let conn = open_store_in_memory().unwrap();
    let storage = TodoStorage::new(&conn);

    assert!(storage.load().is_empty());
    assert!(storage.try_load().unwrap().is_none());
}

#[test]
fn malformed_blob_degrades_to_empty_list() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        params![TODOS_STORAGE_KEY, "{not json"],
    )
    .unwrap();

    let storage = TodoStorage::new(&conn);
    // Public contract: no error escapes, the list is just empty.
    assert!(storage.load().is_empty());
    // The fallible path still reports what went wrong.
    assert!(matches!(storage.try_load(), Err(StorageError::Serde(_))));
}

#[test]
fn save_overwrites_the_prior_blob_wholesale() {
    let conn = open_store_in_memory().unwrap();
    let storage = TodoStorage::new(&conn);

    storage.try_save(&sample_todos()).unwrap();
    storage.try_save(&[]).unwrap();

    assert_eq!(storage.try_load().unwrap(), Some(Vec::new()));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.sqlite3");

    let todos = sample_todos();
    {
        let conn = open_store(&path).unwrap();
        TodoStorage::new(&conn).try_save(&todos).unwrap();
    }

    let conn = open_store(&path).unwrap();
    assert_eq!(TodoStorage::new(&conn).load(), todos);
}

#[test]
fn open_refuses_newer_schema_versions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    }

    let err = open_store(&path).unwrap_err();
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("expected schema version error, got {other}"),
    }
}

#[test]
fn persisted_blob_is_the_documented_json_layout() {
    let conn = open_store_in_memory().unwrap();
    let storage = TodoStorage::new(&conn);
    storage.try_save(&sample_todos()).unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1;",
            [TODOS_STORAGE_KEY],
            |row| row.get(0),
        )
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().expect("blob must be a JSON array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "t-1");
    assert_eq!(entries[0]["priority"], "medium");
    assert_eq!(entries[0]["createdAt"], 1_700_000_100_000_i64);
    assert_eq!(entries[1]["done"], true);
}
