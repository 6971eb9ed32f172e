//! The geometry/routing service trait.
//!
//! # Contract
//!
//! Every method is a blocking request/response call.  Implementations may
//! wrap a GIS engine, a remote service, or a test script; whatever they do,
//! retries, timeouts, and backoff stay on their side of this trait.  The
//! search calls each method at most once per expansion and never overlaps two
//! calls.
//!
//! Inputs are passed by value or reference and results are returned as fresh
//! feature sets.  There is no layer "selection" state: filtering is always
//! expressed as a [`Predicate`] and answered with a new set, so nothing has to
//! be cleared after a call.
//!
//! # Units
//!
//! Distances are in the units of the datasets' CRS.  Speeds are distance
//! units per hour, so path costs and travel budgets are in hours.

use ti_core::{Coordinate, Direction, Feature, FeatureId, FeatureSet, RouteKey, StopId};

use crate::{NetworkResult, PathSet};

/// Edge weight used by a shortest-path request.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum EdgeSpeed {
    /// Every edge has the same speed (walking).
    Uniform(f64),
    /// Each edge carries its own `speed` attribute (route segments).
    Attribute,
}

/// Which way edges may be traversed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DirectionPolicy {
    /// Both ways (streets).
    Both,
    /// Edges tagged with this direction are traversed forward, edges tagged
    /// with its reverse backward; untagged edges default to this direction.
    Along(Direction),
}

/// Attribute filter for [`GeometryService::extract_by_attribute`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Predicate {
    Route(RouteKey),
    Fid(FeatureId),
    StopId(StopId),
}

impl Predicate {
    pub fn matches(&self, feature: &Feature) -> bool {
        match *self {
            Predicate::Route(route) => feature.attributes.route == Some(route),
            Predicate::Fid(fid) => feature.fid == fid,
            Predicate::StopId(stop) => feature.attributes.stop_id == Some(stop),
        }
    }
}

/// Geometry and network-analysis operations the search delegates.
pub trait GeometryService {
    /// Polygon(s) covering everything within `distance` of `center`.
    ///
    /// An empty result is legal and means "nothing to search".
    fn buffer(&self, center: &Coordinate, distance: f64) -> NetworkResult<FeatureSet>;

    /// The parts of `layer` inside `boundary`.
    fn clip(&self, layer: &FeatureSet, boundary: &FeatureSet) -> NetworkResult<FeatureSet>;

    /// Least-cost paths over `network` from `start` to every feature in
    /// `targets`.
    ///
    /// One [`PathFeature`][crate::PathFeature] per target; unreachable
    /// targets come back with `cost: None`.
    fn shortest_path_to_targets(
        &self,
        network:   &FeatureSet,
        start:     &Coordinate,
        speed:     EdgeSpeed,
        direction: DirectionPolicy,
        targets:   &FeatureSet,
    ) -> NetworkResult<PathSet>;

    /// Every edge of `network` reachable from `start` within `travel_budget`
    /// hours at `speed`.
    fn service_area_from_point(
        &self,
        network:       &FeatureSet,
        start:         &Coordinate,
        travel_budget: f64,
        speed:         f64,
    ) -> NetworkResult<FeatureSet>;

    /// Union-simplify.  Must never return more features than it was given.
    fn dissolve(&self, set: &FeatureSet) -> NetworkResult<FeatureSet>;

    /// Concatenate several sets into one.
    fn merge(&self, sets: &[&FeatureSet]) -> NetworkResult<FeatureSet>;

    /// Features of `layer` matching `predicate`, as a fresh set.
    ///
    /// The default filters in memory; engines with indexed layers override it.
    fn extract_by_attribute(
        &self,
        layer:     &FeatureSet,
        predicate: &Predicate,
    ) -> NetworkResult<FeatureSet> {
        Ok(layer.filter(|f| predicate.matches(f)))
    }

    /// Features of `layer` lying within `distance` of any feature in
    /// `reference`.
    fn extract_within_distance(
        &self,
        layer:     &FeatureSet,
        reference: &FeatureSet,
        distance:  f64,
    ) -> NetworkResult<FeatureSet>;
}
