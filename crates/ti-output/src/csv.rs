//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `service_areas.csv` — one row per exported feature, geometry as WKT
//! - `run_summaries.csv` — one row per published search

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::AreaSink;
use crate::{AreaRow, OutputResult, RunSummaryRow};

/// Writes published areas to two CSV files.
pub struct CsvSink {
    areas:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvSink {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut areas = Writer::from_path(dir.join("service_areas.csv"))?;
        areas.write_record(["dataset", "fid", "crs", "geometry"])?;

        let mut summaries = Writer::from_path(dir.join("run_summaries.csv"))?;
        summaries.write_record([
            "name",
            "minutes",
            "status",
            "expansions",
            "aborted_expansions",
            "walk_nodes",
            "transit_nodes",
            "repeat_count",
            "elapsed_ms",
        ])?;

        Ok(Self { areas, summaries, finished: false })
    }
}

impl AreaSink for CsvSink {
    fn write_rows(&mut self, _dataset: &str, rows: &[AreaRow]) -> OutputResult<()> {
        for row in rows {
            self.areas.write_record(&[
                row.dataset.clone(),
                row.fid.to_string(),
                row.crs.clone(),
                row.geometry.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.name.clone(),
            row.minutes.clone(),
            row.status.to_owned(),
            row.expansions.to_string(),
            row.aborted_expansions.to_string(),
            row.walk_nodes.to_string(),
            row.transit_nodes.to_string(),
            row.repeat_count.to_string(),
            row.elapsed_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.areas.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
