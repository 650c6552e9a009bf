#![expect(clippy::unwrap_used, reason = "test code")]

use appstore_rank_core::AppId;
use tempfile::TempDir;

use super::{create_test_observation, create_test_storage};
use crate::{RankStore as _, Storage, StorageError};

#[test]
fn test_ensure_schema_is_idempotent() {
    let (storage, _temp_dir) = create_test_storage();
    storage.record(&create_test_observation(42, "keep", Some(4))).unwrap();

    storage.ensure_schema().unwrap();
    storage.ensure_schema().unwrap();

    let rows = storage.observations_for(AppId::new(42)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].word, "keep");
}

#[test]
fn test_existing_table_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("itunes.db");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE itunes (id INTEGER, word TEXT, pos INTEGER, date DATE);
             INSERT INTO itunes VALUES (1, 'legacy', NULL, '2023-01-01 00:00:00');",
        )
        .unwrap();
    }

    let storage = Storage::new(&db_path).unwrap();
    storage.ensure_schema().unwrap();
    let rows = storage.observations_for(AppId::new(1)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].word, "legacy");
}

#[test]
fn test_new_database_starts_empty() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(storage.row_count().unwrap(), 0);
    assert!(storage.path().exists());
}

#[test]
fn test_open_fails_for_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("no-such-dir").join("itunes.db");
    let err = Storage::new(&db_path).unwrap_err();
    assert!(matches!(err, StorageError::Open { .. }));
}

#[test]
fn test_open_leaves_table_creation_to_ensure_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("itunes.db");
    let storage = Storage::new(&db_path).unwrap();

    assert!(storage.row_count().is_err());
    storage.ensure_schema().unwrap();
    assert_eq!(storage.row_count().unwrap(), 0);
}
