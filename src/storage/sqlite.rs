use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::json;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::{RoundStore, StorageError};
use crate::model::{Round, RoundId};

const SCHEMA: &str = include_str!("../sql/schema/sqlite/00_round.sql");

const SELECT_ROUND: &str = "SELECT round_id, course_id, course_name, played_on, start_time, end_time, scores, played_holes FROM round";

/// Rounds persisted to a single SQLite database.
///
/// The connection sits behind a mutex and every statement runs on tokio's
/// blocking pool, so callers on the async side never stall on disk I/O.
#[derive(Clone)]
pub struct SqliteRoundStore {
    conn: Arc<Mutex<Connection>>,
}

struct RoundRow {
    round_id: String,
    course_id: String,
    course_name: String,
    played_on: String,
    start_time: Option<String>,
    end_time: Option<String>,
    scores: String,
    played_holes: String,
}

impl RoundRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            round_id: row.get(0)?,
            course_id: row.get(1)?,
            course_name: row.get(2)?,
            played_on: row.get(3)?,
            start_time: row.get(4)?,
            end_time: row.get(5)?,
            scores: row.get(6)?,
            played_holes: row.get(7)?,
        })
    }

    fn into_round(self) -> Result<Round, StorageError> {
        let scores: serde_json::Value = serde_json::from_str(&self.scores)?;
        let played_holes: serde_json::Value = serde_json::from_str(&self.played_holes)?;
        let doc = json!({
            "id": self.round_id,
            "course_id": self.course_id,
            "course_name": self.course_name,
            "date": self.played_on,
            "start_time": self.start_time,
            "end_time": self.end_time,
            "scores": scores,
            "played_holes": played_holes,
        });
        serde_json::from_value(doc)
            .map_err(|e| StorageError::new(format!("round {}: {e}", self.round_id)))
    }
}

impl SqliteRoundStore {
    /// Open (or create) a database file and apply the schema.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let started_at = Instant::now();
        tracing::info!("opening round store {}", path.display());
        let conn = Connection::open(path).inspect_err(|e| {
            tracing::error!(
                duration_ms = started_at.elapsed().as_millis(),
                "failed to open round store {}: {e}",
                path.display()
            );
        })?;
        Self::bootstrap(conn, started_at)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let started_at = Instant::now();
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn, started_at)
    }

    fn bootstrap(conn: Connection, started_at: Instant) -> Result<Self, StorageError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(
            duration_ms = started_at.elapsed().as_millis(),
            "round store ready"
        );
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StorageError::new("sqlite connection lock poisoned"))?;
            f(&mut guard)
        })
        .await?
    }
}

#[async_trait]
impl RoundStore for SqliteRoundStore {
    async fn save(&self, round: &Round) -> Result<(), StorageError> {
        let round_id = round.id().to_string();
        let course_id = round.course_id().to_string();
        let course_name = round.course_name().to_string();
        let played_on = round.date().to_rfc3339();
        let start_time = round.start_time().map(|t| t.to_rfc3339());
        let end_time = round.end_time().map(|t| t.to_rfc3339());
        let scores = serde_json::to_string(round.scores())?;
        let played_holes = serde_json::to_string(round.played_holes())?;

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO round (round_id, course_id, course_name, played_on, start_time, end_time, scores, played_holes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(round_id) DO UPDATE SET
                    course_id = excluded.course_id,
                    course_name = excluded.course_name,
                    played_on = excluded.played_on,
                    start_time = excluded.start_time,
                    end_time = excluded.end_time,
                    scores = excluded.scores,
                    played_holes = excluded.played_holes;",
                params![
                    round_id,
                    course_id,
                    course_name,
                    played_on,
                    start_time,
                    end_time,
                    scores,
                    played_holes
                ],
            )?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: RoundId) -> Result<(), StorageError> {
        let round_id = id.to_string();
        self.with_conn(move |conn| {
            let changed = conn.execute("DELETE FROM round WHERE round_id = ?1;", params![round_id])?;
            if changed == 0 {
                return Err(StorageError::new(format!("round {round_id} not found")));
            }
            Ok(())
        })
        .await
    }

    async fn get(&self, id: RoundId) -> Result<Option<Round>, StorageError> {
        let round_id = id.to_string();
        let row = self
            .with_conn(move |conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_ROUND} WHERE round_id = ?1;"))?;
                Ok(stmt
                    .query_row(params![round_id], RoundRow::from_row)
                    .optional()?)
            })
            .await?;
        row.map(RoundRow::into_round).transpose()
    }

    async fn list(&self) -> Result<Vec<Round>, StorageError> {
        let rows = self
            .with_conn(|conn| {
                let mut stmt =
                    conn.prepare(&format!("{SELECT_ROUND} ORDER BY played_on DESC;"))?;
                let rows = stmt
                    .query_map([], RoundRow::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await?;
        rows.into_iter().map(RoundRow::into_round).collect()
    }
}
