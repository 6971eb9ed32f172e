//! The `AreaSink` trait implemented by all export backends.

use ti_core::FeatureSet;

use crate::{AreaRow, OutputResult, RunSummaryRow};

/// Destination for published service areas.
///
/// Dataset names are chosen by the caller (see
/// [`Publisher`][crate::Publisher]); a sink never decides where a dataset
/// goes beyond the location it was opened at.
pub trait AreaSink {
    /// Write pre-rendered rows of one named dataset.
    fn write_rows(&mut self, dataset: &str, rows: &[AreaRow]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every feature of `area` as dataset `dataset`.
    fn write(&mut self, area: &FeatureSet, dataset: &str) -> OutputResult<()> {
        self.write_rows(dataset, &AreaRow::from_area(dataset, area))
    }
}
