//! Plain data row types written by output sinks.

use ti_core::FeatureSet;
use ti_search::SearchSummary;

use wkt::ToWkt;

/// One exported feature.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRow {
    pub dataset:  String,
    pub fid:      u32,
    pub crs:      String,
    /// Geometry as well-known text.
    pub geometry: String,
}

impl AreaRow {
    /// One row per feature of `area`, all tagged with `dataset`.
    pub fn from_area(dataset: &str, area: &FeatureSet) -> Vec<AreaRow> {
        area.iter()
            .map(|f| AreaRow {
                dataset:  dataset.to_owned(),
                fid:      f.fid.get(),
                crs:      area.crs.as_str().to_owned(),
                geometry: f.geometry.wkt_string(),
            })
            .collect()
    }
}

/// Counters for one published search.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummaryRow {
    pub name:               String,
    pub minutes:            String,
    pub status:             &'static str,
    pub expansions:         u64,
    pub aborted_expansions: u64,
    pub walk_nodes:         u64,
    pub transit_nodes:      u64,
    pub repeat_count:       u64,
    pub elapsed_ms:         u64,
}

impl RunSummaryRow {
    pub fn new(name: &str, minutes: &str, summary: &SearchSummary) -> Self {
        Self {
            name:               name.to_owned(),
            minutes:            minutes.to_owned(),
            status:             summary.status.as_str(),
            expansions:         summary.expansions as u64,
            aborted_expansions: summary.aborted_expansions as u64,
            walk_nodes:         summary.walk_nodes as u64,
            transit_nodes:      summary.transit_nodes as u64,
            repeat_count:       summary.repeat_count as u64,
            elapsed_ms:         summary.elapsed.as_millis() as u64,
        }
    }
}
