//! The `Search` orchestrator and its main loop.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use ti_core::{Coordinate, FeatureSet};
use ti_network::{GeometryService, TransitData};

use crate::{
    CancellationToken, ExpansionEngine, NodeMode, SearchConfig, SearchError, SearchNode,
    SearchObserver, SearchResult, SearchTables,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Status and results ────────────────────────────────────────────────────────

/// Lifecycle of a [`Search`].
///
/// ```text
/// Idle ──run──▶ Running ──frontier empty──▶ Exhausted
///                  │
///                  └──token cancelled──▶ Cancelled
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStatus {
    Idle,
    Running,
    Exhausted,
    Cancelled,
}

impl SearchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::Idle      => "idle",
            SearchStatus::Running   => "running",
            SearchStatus::Exhausted => "exhausted",
            SearchStatus::Cancelled => "cancelled",
        }
    }
}

/// Counters for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSummary {
    pub status:             SearchStatus,
    /// Nodes handed to the expansion engine, aborted ones included.
    pub expansions:         usize,
    pub aborted_expansions: usize,
    /// Superseded frontier entries dropped without expansion.
    pub stale_skipped:      usize,
    /// Origin and walk-node expansions.
    pub walk_nodes:         usize,
    pub transit_nodes:      usize,
    pub repeat_count:       usize,
    /// Wall-clock time; diagnostic only.
    pub elapsed:            Duration,
}

/// The pair of finalized service areas plus run counters.
///
/// An area is `None` when nothing was ever contributed to it.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub walking: Option<FeatureSet>,
    pub transit: Option<FeatureSet>,
    pub summary: SearchSummary,
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Multi-modal service-area search over one transit network.
///
/// Holds only borrowed collaborators and configuration; every run builds its
/// own ledger, frontier and areas and drops the first two before returning.
/// Create via [`SearchBuilder`][crate::SearchBuilder].
pub struct Search<'a, G: ?Sized, D: ?Sized> {
    pub(crate) service: &'a G,
    pub(crate) data:    &'a D,
    pub(crate) config:  SearchConfig,
    pub(crate) status:  SearchStatus,
}

impl<'a, G, D> Search<'a, G, D>
where
    G: GeometryService + ?Sized,
    D: TransitData + ?Sized,
{
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// State of the most recent run, `Idle` before the first one.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn service(&self) -> &'a G {
        self.service
    }

    pub fn data(&self) -> &'a D {
        self.data
    }

    /// Search from `origin`, given in the `"x,y [CRS]"` text form, for
    /// `time_limit` hours.
    pub fn run<O: SearchObserver + ?Sized>(
        &mut self,
        origin:     &str,
        time_limit: f64,
        cancel:     &CancellationToken,
        observer:   &mut O,
    ) -> SearchResult<SearchOutcome> {
        let origin: Coordinate = origin.parse()?;
        self.run_from(origin, time_limit, cancel, observer)
    }

    /// Like [`run`][Self::run] with an already-parsed origin.
    pub fn run_from<O: SearchObserver + ?Sized>(
        &mut self,
        origin:     Coordinate,
        time_limit: f64,
        cancel:     &CancellationToken,
        observer:   &mut O,
    ) -> SearchResult<SearchOutcome> {
        if !(time_limit.is_finite() && time_limit >= 0.0) {
            return Err(SearchError::InvalidTimeLimit(time_limit));
        }

        let started = Instant::now();
        let mut tables = SearchTables::new(time_limit, &self.config);
        let engine = ExpansionEngine::new(self.service, self.data, &self.config);

        observer.on_search_start(&origin, time_limit);
        tables.ledger.admit_origin();
        tables.frontier.insert(SearchNode::origin(origin));
        self.status = SearchStatus::Running;

        let mut expansions = 0;
        let mut aborted = 0;
        let mut walk_nodes = 0;
        let mut transit_nodes = 0;

        let status = loop {
            let Some(node) = tables.frontier.pop_next(&tables.ledger) else {
                break SearchStatus::Exhausted;
            };
            if cancel.is_cancelled() {
                debug!(%node, "cancelled; discarding popped node");
                observer.on_cancelled(&node);
                break SearchStatus::Cancelled;
            }

            observer.on_expansion_start(&node);
            let outcome = engine.expand(&node, &mut tables);
            expansions += 1;
            match node.mode() {
                NodeMode::Transit => transit_nodes += 1,
                NodeMode::Origin | NodeMode::Walk => walk_nodes += 1,
            }
            match &outcome {
                Ok(report) => debug!(
                    %node,
                    paths = report.paths,
                    recorded = report.recorded,
                    enqueued = report.enqueued,
                    pending = tables.frontier.len(),
                    "expanded"
                ),
                Err(e) => {
                    aborted += 1;
                    warn!(%node, error = %e, "expansion aborted");
                }
            }
            observer.on_expansion_end(&node, &outcome, &tables.areas);
        };
        self.status = status;

        let (walking, transit) = tables.areas.finalize(self.service);
        let summary = SearchSummary {
            status,
            expansions,
            aborted_expansions: aborted,
            stale_skipped: tables.frontier.stale_skipped(),
            walk_nodes,
            transit_nodes,
            repeat_count: tables.ledger.repeat_count(),
            elapsed: started.elapsed(),
        };
        debug!(
            status = status.as_str(),
            walk_labels = tables.ledger.walk_len(),
            transit_labels = tables.ledger.transit_len(),
            "search finished"
        );
        observer.on_search_end(&summary, &tables.ledger);

        Ok(SearchOutcome { walking, transit, summary })
    }
}
