//! `ExpansionEngine` — one popped node in, new labels and area pieces out.
//!
//! # Branches
//!
//! ```text
//! Origin / Walk node
//!   ① buffer the node by walking_speed × remaining budget
//!   ② clip streets and route stops to the buffer
//!   ③ walking paths to every clipped route stop
//!   ④ record walking arrivals at the physical stops      (walk ledger, no enqueue)
//!   ⑤ board: relax route stop at cost + ½ headway        (transit ledger → frontier)
//!   ⑥ walking service area within the remaining budget   (walking area)
//!
//! Transit node
//!   ① extract the node's route segments and route stops
//!   ② riding paths along the route, honouring its direction
//!   ③ path geometries                                    (transit area)
//!   ④ record ride arrivals, farthest first, until a stop already has a
//!      strictly better label                             (transit ledger, no enqueue)
//!   ⑤ alight: relax the physical stop at the ride cost   (walk ledger → frontier)
//! ```
//!
//! A branch only feeds the opposite mode through `relax`; the plain records
//! in ④ write the ledger of the branch's own result type and never enqueue.

use tracing::debug;

use ti_core::{Coordinate, FeatureId, RouteKey, StopId};
use ti_network::{DirectionPolicy, EdgeSpeed, GeometryService, PathSet, Predicate, TransitData};

use crate::{
    AreaKind, ExpansionError, NodeKey, NodeLedger, NodeMode, PriorityFrontier, SearchConfig,
    SearchNode, ServiceAreaAccumulator,
};

/// Everything one search run mutates.
pub struct SearchTables {
    pub ledger:   NodeLedger,
    pub frontier: PriorityFrontier,
    pub areas:    ServiceAreaAccumulator,
}

impl SearchTables {
    pub fn new(time_limit: f64, config: &SearchConfig) -> Self {
        Self {
            ledger:   NodeLedger::new(time_limit, config.repeat_search_threshold),
            frontier: PriorityFrontier::new(),
            areas:    ServiceAreaAccumulator::new(config.dissolve_threshold),
        }
    }
}

/// What one successful expansion did.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpansionReport {
    pub mode:     NodeMode,
    /// Paths that survived the reachability and budget filter.
    pub paths:    usize,
    /// Plain ledger records (walking arrivals or ride arrivals).
    pub recorded: usize,
    /// Nodes pushed onto the frontier.
    pub enqueued: usize,
}

impl ExpansionReport {
    fn empty(mode: NodeMode) -> Self {
        Self { mode, paths: 0, recorded: 0, enqueued: 0 }
    }
}

/// Average wait for a route running `trips_per_hour` departures an hour.
///
/// `None` for a route with no (or a nonsensical) schedule; such a route
/// cannot be boarded.
#[inline]
pub fn average_wait(trips_per_hour: f64) -> Option<f64> {
    (trips_per_hour.is_finite() && trips_per_hour > 0.0).then(|| 0.5 / trips_per_hour)
}

pub struct ExpansionEngine<'a, G: ?Sized, D: ?Sized> {
    service: &'a G,
    data:    &'a D,
    config:  &'a SearchConfig,
}

impl<'a, G, D> ExpansionEngine<'a, G, D>
where
    G: GeometryService + ?Sized,
    D: TransitData + ?Sized,
{
    pub fn new(service: &'a G, data: &'a D, config: &'a SearchConfig) -> Self {
        Self { service, data, config }
    }

    /// Expand `node`, which must be current in `tables.ledger`.
    ///
    /// On `Err` the tables keep whatever the branch had already written.
    pub fn expand(
        &self,
        node:   &SearchNode,
        tables: &mut SearchTables,
    ) -> Result<ExpansionReport, ExpansionError> {
        match node.key {
            NodeKey::Origin | NodeKey::Walk(_) => self.expand_walk(node, tables),
            NodeKey::Transit(route_stop) => self.expand_transit(node, route_stop, tables),
        }
    }

    // ── Walk branch ───────────────────────────────────────────────────────

    fn expand_walk(
        &self,
        node:   &SearchNode,
        tables: &mut SearchTables,
    ) -> Result<ExpansionReport, ExpansionError> {
        let mut report = ExpansionReport::empty(node.mode());
        let time_limit = tables.ledger.time_limit();
        let budget = time_limit - node.arrival;
        if budget <= 0.0 {
            return Ok(report);
        }

        let start = self.resolve_walk(node)?;
        let speed = self.config.walking_speed;
        let distance = speed * budget;

        let boundary = self.service.buffer(&start, distance)?;
        if boundary.is_empty() {
            return Err(ExpansionError::EmptyBuffer { center: start.to_string(), distance });
        }
        let streets = self.service.clip(self.data.streets(), &boundary)?;
        let targets = self.service.clip(self.data.route_stops(), &boundary)?;

        let mut paths = self.service.shortest_path_to_targets(
            &streets,
            &start,
            EdgeSpeed::Uniform(speed),
            DirectionPolicy::Both,
            &targets,
        )?;
        paths.retain_within(node.arrival, time_limit);
        paths.sort_by_cost_desc();
        report.paths = paths.len();

        report.recorded = self.record_walking_arrivals(node, &paths, &mut tables.ledger);

        for path in &paths.paths {
            let Some(cost) = path.reachable_cost() else { continue };
            let Some(route) = path.route else {
                debug!(route_stop = %path.target, "route stop without a route; not boarding");
                continue;
            };
            let Some(wait) = self.data.trips_per_hour(route).and_then(average_wait) else {
                debug!(%route, "route has no scheduled trips; not boarding");
                continue;
            };
            let arrival = node.arrival + cost + wait;
            if tables.ledger.relax(NodeKey::Transit(path.target), arrival) {
                tables.frontier.insert(SearchNode::transit(path.target, route, arrival));
                report.enqueued += 1;
            }
        }

        let area = self.service.service_area_from_point(&streets, &start, budget, speed)?;
        tables.areas.merge(self.service, AreaKind::Walking, area)?;

        Ok(report)
    }

    /// Mark every physical stop reached on foot with its walking arrival.
    fn record_walking_arrivals(
        &self,
        node:   &SearchNode,
        paths:  &PathSet,
        ledger: &mut NodeLedger,
    ) -> usize {
        let mut recorded = 0;
        for path in &paths.paths {
            let (Some(cost), Some(stop)) = (path.reachable_cost(), self.physical_stop(path.stop_id))
            else {
                continue;
            };
            if ledger.record(NodeKey::Walk(stop), node.arrival + cost) {
                recorded += 1;
            }
        }
        recorded
    }

    fn resolve_walk(&self, node: &SearchNode) -> Result<Coordinate, ExpansionError> {
        match node.key {
            NodeKey::Walk(stop) => self
                .data
                .stop_coordinate(stop)
                .ok_or(ExpansionError::Unresolved(node.key)),
            _ => node.coordinate.clone().ok_or(ExpansionError::Unresolved(node.key)),
        }
    }

    // ── Transit branch ────────────────────────────────────────────────────

    fn expand_transit(
        &self,
        node:       &SearchNode,
        route_stop: FeatureId,
        tables:     &mut SearchTables,
    ) -> Result<ExpansionReport, ExpansionError> {
        let mut report = ExpansionReport::empty(NodeMode::Transit);
        let time_limit = tables.ledger.time_limit();

        let route: RouteKey = node.route.ok_or(ExpansionError::MissingRoute(node.key))?;
        let start = self
            .data
            .route_stop_coordinate(route_stop)
            .ok_or(ExpansionError::Unresolved(node.key))?;

        let line = self.service.extract_by_attribute(self.data.routes(), &Predicate::Route(route))?;
        if line.is_empty() {
            return Err(ExpansionError::UnknownRoute(route));
        }
        let stops =
            self.service.extract_by_attribute(self.data.route_stops(), &Predicate::Route(route))?;

        let mut paths = self.service.shortest_path_to_targets(
            &line,
            &start,
            EdgeSpeed::Attribute,
            DirectionPolicy::Along(route.direction),
            &stops,
        )?;
        paths.retain_within(node.arrival, time_limit);
        paths.sort_by_cost_desc();
        report.paths = paths.len();

        tables.areas.merge(self.service, AreaKind::Transit, paths.to_features())?;

        report.recorded = tables.ledger.record_along_route(
            paths
                .paths
                .iter()
                .filter_map(|p| Some((p.target, node.arrival + p.reachable_cost()?))),
        );

        for path in &paths.paths {
            let Some(cost) = path.reachable_cost() else { continue };
            let Some(stop) = self.physical_stop(path.stop_id) else {
                debug!(route_stop = %path.target, stop_id = ?path.stop_id, "no physical stop; not alighting");
                continue;
            };
            let arrival = node.arrival + cost;
            if tables.ledger.relax(NodeKey::Walk(stop), arrival) {
                tables.frontier.insert(SearchNode::walk(stop, arrival));
                report.enqueued += 1;
            }
        }

        Ok(report)
    }

    fn physical_stop(&self, stop_id: Option<StopId>) -> Option<FeatureId> {
        stop_id.and_then(|id| self.data.stop_fid(id))
    }
}
