//! Feature sets exchanged with the geometry service.
//!
//! A [`FeatureSet`] is the in-memory equivalent of a vector layer: a CRS plus
//! an ordered list of features.  Datasets (streets, stops, routes), clip and
//! buffer results, and service areas are all feature sets.  The search core
//! only ever counts, filters, and forwards them; every geometric operation
//! belongs to the geometry service.

use geo_types::{Geometry, Point};

use crate::{Coordinate, CrsCode, FeatureId, RouteKey, StopId};

/// The attribute columns the search reads.
///
/// Every column is optional because each dataset only carries a subset:
/// stops have `stop_id`; route stops add `route`; routes carry `route`,
/// `trips_per_hour` and `speed`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub stop_id:        Option<StopId>,
    pub route:          Option<RouteKey>,
    /// Scheduled departures per hour on a route.
    pub trips_per_hour: Option<f64>,
    /// Vehicle speed on a route segment, distance units per hour.
    pub speed:          Option<f64>,
}

/// One row of a feature set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub fid:        FeatureId,
    pub geometry:   Geometry<f64>,
    pub attributes: Attributes,
}

impl Feature {
    pub fn new(fid: FeatureId, geometry: impl Into<Geometry<f64>>) -> Self {
        Self { fid, geometry: geometry.into(), attributes: Attributes::default() }
    }

    pub fn with_stop(mut self, stop_id: StopId) -> Self {
        self.attributes.stop_id = Some(stop_id);
        self
    }

    pub fn with_route(mut self, route: RouteKey) -> Self {
        self.attributes.route = Some(route);
        self
    }

    pub fn with_schedule(mut self, trips_per_hour: f64, speed: f64) -> Self {
        self.attributes.trips_per_hour = Some(trips_per_hour);
        self.attributes.speed = Some(speed);
        self
    }

    /// The feature's location if it is a point feature.
    pub fn point(&self) -> Option<Point<f64>> {
        match &self.geometry {
            Geometry::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// A CRS-tagged, ordered collection of features.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet {
    pub crs:      CrsCode,
    pub features: Vec<Feature>,
}

impl FeatureSet {
    /// An empty set in `crs`.
    pub fn new(crs: CrsCode) -> Self {
        Self { crs, features: Vec::new() }
    }

    pub fn from_features(crs: CrsCode, features: Vec<Feature>) -> Self {
        Self { crs, features }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Linear lookup by fid.  Datasets that are queried repeatedly should be
    /// indexed by the caller.
    pub fn get(&self, fid: FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.fid == fid)
    }

    /// Text-contract coordinate of point feature `fid`.
    pub fn coordinate(&self, fid: FeatureId) -> Option<Coordinate> {
        self.get(fid)
            .and_then(Feature::point)
            .map(|p| Coordinate::from_point(p, &self.crs))
    }

    /// A fresh set holding clones of the features matching `keep`.
    pub fn filter<F>(&self, mut keep: F) -> FeatureSet
    where
        F: FnMut(&Feature) -> bool,
    {
        FeatureSet {
            crs:      self.crs.clone(),
            features: self.features.iter().filter(|f| keep(f)).cloned().collect(),
        }
    }
}
