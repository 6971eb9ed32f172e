use crate::writer::AreaSink;
use crate::{AreaRow, OutputResult, RunSummaryRow};

/// Keeps everything in memory.  Handy for tests and for callers that post-
/// process areas themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// `(dataset, rows)` in write order.
    pub datasets:  Vec<(String, Vec<AreaRow>)>,
    pub summaries: Vec<RunSummaryRow>,
    pub finished:  bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset_names(&self) -> Vec<&str> {
        self.datasets.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn rows(&self, dataset: &str) -> Option<&[AreaRow]> {
        self.datasets
            .iter()
            .find(|(name, _)| name == dataset)
            .map(|(_, rows)| rows.as_slice())
    }
}

impl AreaSink for MemorySink {
    fn write_rows(&mut self, dataset: &str, rows: &[AreaRow]) -> OutputResult<()> {
        self.datasets.push((dataset.to_owned(), rows.to_vec()));
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summaries.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
