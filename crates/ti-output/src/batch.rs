//! Running one search per origin and publishing each result.

use tracing::{info, warn};

use ti_core::minutes_to_hours;
use ti_network::{GeometryService, NamedOrigin, TransitData};
use ti_search::{CancellationToken, Search, SearchObserver, SearchStatus};

use crate::{AreaSink, OutputResult, Publisher};

/// Dataset name for a single-origin run.
pub fn single_point_name(minutes: f64) -> String {
    format!("Point - {minutes} minute service area")
}

/// Name for the `index`th origin (zero-based) of a batch.
pub fn origin_name(origin: &NamedOrigin, index: usize) -> String {
    match &origin.name {
        Some(name) => name.clone(),
        None => format!("Point {index}"),
    }
}

/// What a batch run got through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchReport {
    /// Origin names whose search ran to completion and was published.
    pub completed: Vec<String>,
    /// Every dataset written, in order.
    pub datasets:  Vec<String>,
    /// The token was cancelled before every origin was processed.
    pub cancelled: bool,
}

/// Search from each origin for `minutes` and publish every result.
///
/// Stops before the next origin once `cancel` is set.  A search cut short by
/// the token is still published (its areas are the partial result).
pub fn run_batch<G, D, S, O>(
    search:    &mut Search<'_, G, D>,
    publisher: &mut Publisher<'_, G, D, S>,
    origins:   &[NamedOrigin],
    minutes:   f64,
    cancel:    &CancellationToken,
    observer:  &mut O,
) -> OutputResult<BatchReport>
where
    G: GeometryService + ?Sized,
    D: TransitData + ?Sized,
    S: AreaSink,
    O: SearchObserver + ?Sized,
{
    let time_limit = minutes_to_hours(minutes);
    let mut report = BatchReport::default();

    for (i, origin) in origins.iter().enumerate() {
        if cancel.is_cancelled() {
            report.cancelled = true;
            break;
        }

        let name = origin_name(origin, i);
        info!(origin = %name, index = i + 1, total = origins.len(), "searching");
        let outcome = search.run_from(origin.coordinate.clone(), time_limit, cancel, observer)?;
        report.datasets.extend(publisher.publish(&name, time_limit, &outcome)?);

        if outcome.summary.status == SearchStatus::Cancelled {
            warn!(origin = %name, "search cancelled; published partial result");
            report.cancelled = true;
            break;
        }
        report.completed.push(name);
    }

    Ok(report)
}
