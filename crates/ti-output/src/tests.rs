//! Integration tests for ti-output.

use std::cell::Cell;
use std::time::Duration;

use geo_types::{line_string, polygon, Point};

use ti_core::{Coordinate, CrsCode, Feature, FeatureId, FeatureSet};
use ti_network::{
    DirectionPolicy, EdgeSpeed, GeometryService, NetworkResult, PathSet, TransitNetwork,
};
use ti_search::{SearchOutcome, SearchStatus, SearchSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn crs() -> CrsCode {
    CrsCode::new("EPSG:2913")
}

fn blob(fid: u32) -> Feature {
    Feature::new(
        FeatureId(fid),
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)],
    )
}

fn set(fids: &[u32]) -> FeatureSet {
    FeatureSet::from_features(crs(), fids.iter().map(|&f| blob(f)).collect())
}

fn summary() -> SearchSummary {
    SearchSummary {
        status:             SearchStatus::Exhausted,
        expansions:         3,
        aborted_expansions: 1,
        stale_skipped:      0,
        walk_nodes:         2,
        transit_nodes:      1,
        repeat_count:       0,
        elapsed:            Duration::from_millis(1_500),
    }
}

fn outcome(walking: Option<FeatureSet>, transit: Option<FeatureSet>) -> SearchOutcome {
    SearchOutcome { walking, transit, summary: summary() }
}

/// Network with no stops: every search expands the origin only.
fn network(blocks: Option<FeatureSet>) -> TransitNetwork {
    let net = TransitNetwork::new(
        FeatureSet::from_features(
            crs(),
            vec![Feature::new(FeatureId(1), line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)])],
        ),
        FeatureSet::new(crs()),
        FeatureSet::new(crs()),
        FeatureSet::new(crs()),
    )
    .unwrap();
    match blocks {
        Some(b) => net.with_blocks(b).unwrap(),
        None => net,
    }
}

/// Every walk reaches a one-feature area and no stops.  Block extraction
/// keeps the even fids.
#[derive(Default)]
struct Flat {
    block_distance: Cell<Option<f64>>,
}

impl GeometryService for Flat {
    fn buffer(&self, center: &Coordinate, _distance: f64) -> NetworkResult<FeatureSet> {
        Ok(FeatureSet::from_features(center.crs.clone(), vec![blob(0)]))
    }

    fn clip(&self, layer: &FeatureSet, _boundary: &FeatureSet) -> NetworkResult<FeatureSet> {
        Ok(layer.clone())
    }

    fn shortest_path_to_targets(
        &self,
        _network:   &FeatureSet,
        _start:     &Coordinate,
        _speed:     EdgeSpeed,
        _direction: DirectionPolicy,
        targets:    &FeatureSet,
    ) -> NetworkResult<PathSet> {
        Ok(PathSet::new(targets.crs.clone(), Vec::new()))
    }

    fn service_area_from_point(
        &self,
        network: &FeatureSet,
        _start:  &Coordinate,
        _budget: f64,
        _speed:  f64,
    ) -> NetworkResult<FeatureSet> {
        Ok(FeatureSet::from_features(network.crs.clone(), vec![blob(50)]))
    }

    fn dissolve(&self, set: &FeatureSet) -> NetworkResult<FeatureSet> {
        Ok(FeatureSet::from_features(set.crs.clone(), set.features.iter().take(1).cloned().collect()))
    }

    fn merge(&self, sets: &[&FeatureSet]) -> NetworkResult<FeatureSet> {
        let mut out = FeatureSet::new(crs());
        for s in sets {
            for f in s.iter() {
                out.push(f.clone());
            }
        }
        Ok(out)
    }

    fn extract_within_distance(
        &self,
        layer:      &FeatureSet,
        _reference: &FeatureSet,
        distance:   f64,
    ) -> NetworkResult<FeatureSet> {
        self.block_distance.set(Some(distance));
        Ok(layer.filter(|f| f.fid.get() % 2 == 0))
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naming {
    use ti_core::minutes_to_hours;
    use ti_network::NamedOrigin;

    use super::*;
    use crate::{minutes_label, origin_name, single_point_name};

    #[test]
    fn minutes_are_whole_when_possible() {
        assert_eq!(minutes_label(0.5), "30");
        assert_eq!(minutes_label(minutes_to_hours(7.0)), "7");
        assert_eq!(minutes_label(minutes_to_hours(45.0)), "45");
        assert_eq!(minutes_label(0.125), "7.5");
    }

    #[test]
    fn single_point_dataset_name() {
        assert_eq!(single_point_name(30.0), "Point - 30 minute service area");
    }

    #[test]
    fn unnamed_origins_are_numbered_from_zero() {
        let at = Coordinate::new(1.0, 2.0, crs());
        assert_eq!(origin_name(&NamedOrigin::new(None, at.clone()), 0), "Point 0");
        assert_eq!(origin_name(&NamedOrigin::new(None, at.clone()), 1), "Point 1");
        assert_eq!(origin_name(&NamedOrigin::new(Some("Library".into()), at), 0), "Library");
    }
}

// ── Publisher ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod publisher {
    use super::*;
    use crate::{MemorySink, PublishOptions, Publisher};

    #[test]
    fn blocks_near_the_walking_area_are_exported() {
        let service = Flat::default();
        let net = network(Some(set(&[1, 2, 3, 4])));
        let mut p = Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());

        let written = p.publish("Library", 0.5, &outcome(Some(set(&[9])), None)).unwrap();
        assert_eq!(written, vec!["Library_30"]);
        assert_eq!(service.block_distance.get(), Some(10.0));

        let sink = p.into_sink();
        let fids: Vec<u32> = sink.rows("Library_30").unwrap().iter().map(|r| r.fid).collect();
        assert_eq!(fids, vec![2, 4]);
    }

    #[test]
    fn walking_area_stands_in_without_blocks() {
        let service = Flat::default();
        let net = network(None);
        let mut p = Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());

        p.publish("Library", 0.5, &outcome(Some(set(&[9])), None)).unwrap();
        assert_eq!(service.block_distance.get(), None);
        let sink = p.into_sink();
        let rows = sink.rows("Library_30").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fid, 9);
        assert_eq!(rows[0].crs, "EPSG:2913");
        assert!(rows[0].geometry.starts_with("POLYGON"));
        assert!(rows[0].geometry.contains("1 1"));
    }

    #[test]
    fn networks_exported_when_asked() {
        let service = Flat::default();
        let net = network(None);
        let options = PublishOptions { export_networks: true, ..PublishOptions::default() };
        let mut p = Publisher::new(&service, &net, MemorySink::new(), options);

        let written = p
            .publish("Point 1", 0.25, &outcome(Some(set(&[1])), Some(set(&[2, 3]))))
            .unwrap();
        assert_eq!(written, vec!["Point 1_15", "Point 1_15_walk", "Point 1_15_transit"]);
        assert_eq!(p.sink().rows("Point 1_15_transit").unwrap().len(), 2);
    }

    #[test]
    fn missing_areas_are_skipped_not_errors() {
        let service = Flat::default();
        let net = network(None);
        let options = PublishOptions { export_networks: true, ..PublishOptions::default() };
        let mut p = Publisher::new(&service, &net, MemorySink::new(), options);

        let written = p.publish("Empty", 0.5, &outcome(None, None)).unwrap();
        assert!(written.is_empty());
        let sink = p.into_sink();
        assert!(sink.datasets.is_empty());
        assert_eq!(sink.summaries.len(), 1);
    }

    #[test]
    fn summary_row_carries_the_run_counters() {
        let service = Flat::default();
        let net = network(None);
        let mut p = Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());
        p.publish("Library", 0.5, &outcome(Some(set(&[1])), None)).unwrap();
        p.finish().unwrap();

        let sink = p.into_sink();
        assert!(sink.finished);
        let row = &sink.summaries[0];
        assert_eq!(row.name, "Library");
        assert_eq!(row.minutes, "30");
        assert_eq!(row.status, "exhausted");
        assert_eq!(row.expansions, 3);
        assert_eq!(row.aborted_expansions, 1);
        assert_eq!(row.elapsed_ms, 1_500);
    }
}

// ── Batch runner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use ti_network::NamedOrigin;
    use ti_search::{CancellationToken, NodeLedger, NoopObserver, SearchBuilder, SearchObserver};

    use super::*;
    use crate::{run_batch, MemorySink, OutputError, PublishOptions, Publisher};

    fn origins() -> Vec<NamedOrigin> {
        vec![
            NamedOrigin::new(Some("Library".into()), Coordinate::new(0.0, 0.0, crs())),
            NamedOrigin::new(None, Coordinate::new(5.0, 0.0, crs())),
            NamedOrigin::new(None, Coordinate::new(9.0, 0.0, crs())),
        ]
    }

    #[test]
    fn publishes_every_origin() {
        let service = Flat::default();
        let net = network(None);
        let mut search = SearchBuilder::new(&service, &net).build().unwrap();
        let mut publisher =
            Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());

        let report = run_batch(
            &mut search,
            &mut publisher,
            &origins(),
            30.0,
            &CancellationToken::new(),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(report.completed, vec!["Library", "Point 1", "Point 2"]);
        assert_eq!(report.datasets, vec!["Library_30", "Point 1_30", "Point 2_30"]);
        assert!(!report.cancelled);
        assert_eq!(publisher.sink().summaries.len(), 3);
    }

    /// Cancels the shared token once the first search has finished.
    struct CancelAfterFirst(CancellationToken);

    impl SearchObserver for CancelAfterFirst {
        fn on_search_end(&mut self, _summary: &SearchSummary, _ledger: &NodeLedger) {
            self.0.cancel();
        }
    }

    #[test]
    fn stops_before_the_next_origin_once_cancelled() {
        let service = Flat::default();
        let net = network(None);
        let mut search = SearchBuilder::new(&service, &net).build().unwrap();
        let mut publisher =
            Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());
        let token = CancellationToken::new();

        let report = run_batch(
            &mut search,
            &mut publisher,
            &origins(),
            30.0,
            &token,
            &mut CancelAfterFirst(token.clone()),
        )
        .unwrap();

        assert_eq!(report.completed, vec!["Library"]);
        assert!(report.cancelled);
        assert_eq!(publisher.sink().dataset_names(), vec!["Library_30"]);
    }

    #[test]
    fn invalid_budget_is_an_error() {
        let service = Flat::default();
        let net = network(None);
        let mut search = SearchBuilder::new(&service, &net).build().unwrap();
        let mut publisher =
            Publisher::new(&service, &net, MemorySink::new(), PublishOptions::default());

        let err = run_batch(
            &mut search,
            &mut publisher,
            &origins(),
            -5.0,
            &CancellationToken::new(),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, OutputError::Search(_)));
    }
}

// ── CSV sink ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::writer::AreaSink;
    use crate::{CsvSink, RunSummaryRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvSink::new(dir.path()).unwrap();
        assert!(dir.path().join("service_areas.csv").exists());
        assert!(dir.path().join("run_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvSink::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("service_areas.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["dataset", "fid", "crs", "geometry"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("run_summaries.csv")).unwrap();
        assert_eq!(rdr2.headers().unwrap().len(), 9);
    }

    #[test]
    fn csv_area_rows_written() {
        let dir = tmp();
        let mut w = CsvSink::new(dir.path()).unwrap();
        let mut area = set(&[4]);
        area.push(Feature::new(FeatureId(5), Point::new(3.0, 4.0)));
        w.write(&area, "Library_30").unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join("service_areas.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Library_30");
        assert_eq!(&rows[0][1], "4");
        assert_eq!(&rows[0][2], "EPSG:2913");
        assert!(rows[1][3].starts_with("POINT"));
        assert!(rows[1][3].contains("3 4"));
    }

    #[test]
    fn csv_summary_row_written() {
        let dir = tmp();
        let mut w = CsvSink::new(dir.path()).unwrap();
        w.write_summary(&RunSummaryRow::new("Library", "30", &summary())).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Library");
        assert_eq!(&rows[0][2], "exhausted");
        assert_eq!(&rows[0][8], "1500");
    }
}

// ── SQLite sink ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::writer::AreaSink;
    use crate::{RunSummaryRow, SqliteSink};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_rows_written() {
        let dir = tmp();
        let mut w = SqliteSink::new(dir.path()).unwrap();
        w.write(&set(&[1, 2, 3]), "Library_30").unwrap();
        w.write_summary(&RunSummaryRow::new("Library", "30", &summary())).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("service_areas.db")).unwrap();
        let areas: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM service_areas WHERE dataset = 'Library_30'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(areas, 3);
        let status: String = conn
            .query_row("SELECT status FROM run_summaries", [], |r| r.get(0))
            .unwrap();
        assert_eq!(status, "exhausted");
    }
}
