//! Search observer trait for progress reporting and diagnostics.

use tracing::info;

use ti_core::{Coordinate, format_elapsed};

use crate::{
    ExpansionError, ExpansionReport, NodeLedger, SearchNode, SearchSummary,
    ServiceAreaAccumulator,
};

/// Callbacks invoked by [`Search::run`][crate::Search::run] at expansion
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers cannot steer the search; the
/// one way to affect it is to cancel a [`CancellationToken`][crate::CancellationToken]
/// they hold, which the loop notices at its next poll.
///
/// # Example — stop after the first expansion
///
/// ```rust,ignore
/// struct StopAfterOne(CancellationToken);
///
/// impl SearchObserver for StopAfterOne {
///     fn on_expansion_end(&mut self, _: &SearchNode, _: &Result<ExpansionReport, ExpansionError>, _: &ServiceAreaAccumulator) {
///         self.0.cancel();
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called once the origin is admitted, before the first pop.
    fn on_search_start(&mut self, _origin: &Coordinate, _time_limit: f64) {}

    /// Called for every current node, just before it is expanded.
    fn on_expansion_start(&mut self, _node: &SearchNode) {}

    /// Called after each expansion with its outcome and the running areas.
    fn on_expansion_end(
        &mut self,
        _node:    &SearchNode,
        _outcome: &Result<ExpansionReport, ExpansionError>,
        _areas:   &ServiceAreaAccumulator,
    ) {}

    /// Called when the loop stops on a cancelled token.  `discarded` is the
    /// popped node that was not expanded.
    fn on_cancelled(&mut self, _discarded: &SearchNode) {}

    /// Called once, after both areas are finalized.
    fn on_search_end(&mut self, _summary: &SearchSummary, _ledger: &NodeLedger) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Logs the run summary through `tracing` when a search ends.
#[derive(Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_search_start(&mut self, origin: &Coordinate, time_limit: f64) {
        info!(%origin, time_limit, "service area search started");
    }

    fn on_cancelled(&mut self, discarded: &SearchNode) {
        info!(node = %discarded, "service area search cancelled");
    }

    fn on_search_end(&mut self, summary: &SearchSummary, _ledger: &NodeLedger) {
        info!("searched from {} walk nodes", summary.walk_nodes);
        info!("searched from {} transit nodes", summary.transit_nodes);
        info!("repeated searches from {} nodes", summary.repeat_count);
        info!(
            status = summary.status.as_str(),
            expansions = summary.expansions,
            aborted = summary.aborted_expansions,
            "time elapsed: {}",
            format_elapsed(summary.elapsed),
        );
    }
}
