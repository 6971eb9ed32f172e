//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `service_areas.db` file in the configured output
//! directory with two tables: `service_areas` and `run_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::AreaSink;
use crate::{AreaRow, OutputResult, RunSummaryRow};

/// Writes published areas to an SQLite database.
pub struct SqliteSink {
    conn:     Connection,
    finished: bool,
}

impl SqliteSink {
    /// Open (or create) `service_areas.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("service_areas.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS service_areas (
                 dataset  TEXT    NOT NULL,
                 fid      INTEGER NOT NULL,
                 crs      TEXT    NOT NULL,
                 geometry TEXT    NOT NULL
             );
             CREATE INDEX IF NOT EXISTS service_areas_dataset ON service_areas (dataset);
             CREATE TABLE IF NOT EXISTS run_summaries (
                 name               TEXT    NOT NULL,
                 minutes            TEXT    NOT NULL,
                 status             TEXT    NOT NULL,
                 expansions         INTEGER NOT NULL,
                 aborted_expansions INTEGER NOT NULL,
                 walk_nodes         INTEGER NOT NULL,
                 transit_nodes      INTEGER NOT NULL,
                 repeat_count       INTEGER NOT NULL,
                 elapsed_ms         INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl AreaSink for SqliteSink {
    fn write_rows(&mut self, _dataset: &str, rows: &[AreaRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO service_areas (dataset, fid, crs, geometry) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.dataset, row.fid, row.crs, row.geometry])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summaries \
             (name, minutes, status, expansions, aborted_expansions, \
              walk_nodes, transit_nodes, repeat_count, elapsed_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.name,
                row.minutes,
                row.status,
                row.expansions as i64,
                row.aborted_expansions as i64,
                row.walk_nodes as i64,
                row.transit_nodes as i64,
                row.repeat_count as i64,
                row.elapsed_ms as i64,
            ],
        )?;
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
