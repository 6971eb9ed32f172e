//! Shortest-path results.

use geo_types::Geometry;

use ti_core::{Attributes, CrsCode, Feature, FeatureId, FeatureSet, RouteKey, StopId};

/// One path from a start point to one target feature.
#[derive(Clone, Debug, PartialEq)]
pub struct PathFeature {
    /// Fid of the target within the `targets` set that was queried.
    pub target:   FeatureId,
    /// Target's `stop_id` attribute, copied through.
    pub stop_id:  Option<StopId>,
    /// Target's `rte`/`dir` attributes, copied through.
    pub route:    Option<RouteKey>,
    /// Travel time in hours; `None` when the target is unreachable.
    pub cost:     Option<f64>,
    pub geometry: Geometry<f64>,
}

impl PathFeature {
    /// `cost` if the target was actually reached.
    ///
    /// Non-finite and negative costs are treated like a missing one.
    #[inline]
    pub fn reachable_cost(&self) -> Option<f64> {
        self.cost.filter(|c| c.is_finite() && *c >= 0.0)
    }
}

/// All paths returned by one shortest-path request.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    pub crs:   CrsCode,
    pub paths: Vec<PathFeature>,
}

impl PathSet {
    pub fn new(crs: CrsCode, paths: Vec<PathFeature>) -> Self {
        Self { crs, paths }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop unreachable paths and paths whose arrival
    /// (`start_time + cost`) is not strictly inside `time_limit`.
    pub fn retain_within(&mut self, start_time: f64, time_limit: f64) {
        self.paths.retain(|p| match p.reachable_cost() {
            Some(cost) => start_time + cost < time_limit,
            None => false,
        });
    }

    /// Order by descending cost, farthest target first.  Ties keep their
    /// service order.
    pub fn sort_by_cost_desc(&mut self) {
        self.paths.sort_by(|a, b| {
            let a = a.cost.unwrap_or(f64::NEG_INFINITY);
            let b = b.cost.unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
    }

    /// The path geometries as a feature set, keyed by target fid.
    pub fn to_features(&self) -> FeatureSet {
        let features = self
            .paths
            .iter()
            .map(|p| Feature {
                fid:        p.target,
                geometry:   p.geometry.clone(),
                attributes: Attributes {
                    stop_id: p.stop_id,
                    route:   p.route,
                    ..Attributes::default()
                },
            })
            .collect();
        FeatureSet::from_features(self.crs.clone(), features)
    }
}
