//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `tick_summaries`, `faction_scores` and `drone_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DroneSnapshotRow, FactionScoreRow, OutputResult, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick           INTEGER PRIMARY KEY,
                 elapsed_secs   REAL    NOT NULL,
                 searching      INTEGER NOT NULL,
                 moving         INTEGER NOT NULL,
                 collecting     INTEGER NOT NULL,
                 returning      INTEGER NOT NULL,
                 delivering     INTEGER NOT NULL,
                 carrying       INTEGER NOT NULL,
                 resources      INTEGER NOT NULL,
                 available      INTEGER NOT NULL,
                 spawned        INTEGER NOT NULL,
                 deliveries     INTEGER NOT NULL,
                 active_effects INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS faction_scores (
                 tick       INTEGER NOT NULL,
                 faction_id INTEGER NOT NULL,
                 name       TEXT    NOT NULL,
                 score      INTEGER NOT NULL,
                 color      TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS drone_snapshots (
                 drone_id     INTEGER NOT NULL,
                 tick         INTEGER NOT NULL,
                 faction_id   INTEGER NOT NULL,
                 state        TEXT    NOT NULL,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 z            REAL    NOT NULL,
                 has_resource INTEGER NOT NULL,
                 target       INTEGER
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, elapsed_secs, searching, moving, collecting, returning, delivering, \
              carrying, resources, available, spawned, deliveries, active_effects) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rusqlite::params![
                row.tick,
                row.elapsed_secs,
                row.searching,
                row.moving,
                row.collecting,
                row.returning,
                row.delivering,
                row.carrying,
                row.resources,
                row.available,
                row.spawned,
                row.deliveries,
                row.active_effects,
            ],
        )?;
        Ok(())
    }

    fn write_scores(&mut self, rows: &[FactionScoreRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO faction_scores (tick, faction_id, name, score, color) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.faction_id,
                    row.name,
                    row.score,
                    row.color,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[DroneSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO drone_snapshots \
                 (drone_id, tick, faction_id, state, x, y, z, has_resource, target) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.drone_id,
                    row.tick,
                    row.faction_id,
                    row.state,
                    f64::from(row.x),
                    f64::from(row.y),
                    f64::from(row.z),
                    row.has_resource as i64,
                    row.target,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
