//! Test utilities and module declarations for storage tests.

use appstore_rank_core::{AppId, ObservedAt, Position, RankObservation};
use tempfile::TempDir;

use crate::{RankStore as _, Storage};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("itunes.db");
    let storage = Storage::new(&db_path).unwrap();
    storage.ensure_schema().unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn test_timestamp() -> ObservedAt {
    "2024-05-01 12:30:00".parse().unwrap()
}

pub fn create_test_observation(id: i64, word: &str, position: Option<u32>) -> RankObservation {
    RankObservation::new(AppId::new(id), word, position.and_then(Position::new), test_timestamp())
}

mod schema_tests;
