//! `SQLite` rank store

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use appstore_rank_core::{AppId, ObservedAt, Position, RankObservation};
use rusqlite::{Connection, params};

use crate::error::StorageError;
use crate::schema;
use crate::traits::RankStore;

/// Rank history backed by a single `SQLite` file.
///
/// One connection is held for the whole run. Every insert runs in
/// autocommit mode, so a row is on disk before the next catalog request.
#[derive(Debug)]
pub struct Storage {
    conn: Mutex<Connection>,
    path: PathBuf,
}

fn lock_conn(mutex: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, StorageError> {
    mutex.lock().map_err(|_| StorageError::LockPoisoned)
}

fn corrupt(context: String, source: impl std::error::Error + Send + Sync + 'static) -> StorageError {
    StorageError::DataCorruption { context, source: Box::new(source) }
}

impl Storage {
    /// Open (creating if needed) the database file at `db_path`.
    ///
    /// The history table is created by [`RankStore::ensure_schema`], which
    /// the run calls before its first lookup.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path).map_err(|source| StorageError::Open {
            path: db_path.display().to_string(),
            source,
        })?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        tracing::debug!(path = %db_path.display(), "rank store opened");
        Ok(Self { conn: Mutex::new(conn), path: db_path.to_path_buf() })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of rows across all identifiers.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn row_count(&self) -> Result<u64, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM itunes", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

impl RankStore for Storage {
    fn ensure_schema(&self) -> Result<(), StorageError> {
        let conn = lock_conn(&self.conn)?;
        schema::ensure_schema(&conn)?;
        Ok(())
    }

    fn record(&self, observation: &RankObservation) -> Result<(), StorageError> {
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            "INSERT INTO itunes (id, word, pos, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                observation.identifier.get(),
                observation.word,
                observation.position.map(Position::get),
                observation.observed_at.to_string(),
            ],
        )?;
        tracing::debug!(
            id = %observation.identifier,
            word = %observation.word,
            position = ?observation.position.map(Position::get),
            "rank observation stored"
        );
        Ok(())
    }

    fn observations_for(&self, id: AppId) -> Result<Vec<RankObservation>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT id, word, pos, date FROM itunes WHERE id = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map([id.get()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut observations = Vec::new();
        for row in rows {
            let (raw_id, word, raw_pos, raw_date) = row?;
            let position = match raw_pos {
                None => None,
                Some(p) => {
                    let rank = u32::try_from(p)
                        .map_err(|e| corrupt(format!("position {p} for word {word:?}"), e))?;
                    Some(Position::new(rank).ok_or_else(|| {
                        corrupt(
                            format!("zero position for word {word:?}"),
                            rusqlite::Error::IntegralValueOutOfRange(2, p),
                        )
                    })?)
                },
            };
            let observed_at: ObservedAt = raw_date
                .parse()
                .map_err(|e| corrupt(format!("timestamp for word {word:?}"), e))?;
            observations.push(RankObservation::new(AppId::new(raw_id), word, position, observed_at));
        }
        Ok(observations)
    }
}
