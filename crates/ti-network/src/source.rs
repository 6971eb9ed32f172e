//! Transit network datasets.
//!
//! # Datasets
//!
//! | Dataset       | One feature per                    | Attributes read                  |
//! |---------------|------------------------------------|----------------------------------|
//! | `Streets`     | walkable street segment            | —                                |
//! | `Stops`       | physical stop (walk-node key)      | `stop_id`                        |
//! | `RouteStops`  | stop × route × direction (transit-node key) | `stop_id`, `rte`, `dir` |
//! | `Routes`      | route segment                      | `rte`, `dir`, `trips_per_hour`, `speed` |
//! | `Blocks`      | census block polygon (optional)    | —                                |
//!
//! All datasets must share one CRS; coordinates read from them are handed to
//! the geometry service in that CRS.

use std::collections::HashMap;
use std::fmt;

use ti_core::{Coordinate, FeatureId, FeatureSet, RouteKey, StopId};

use crate::{NetworkError, NetworkResult};

/// Names the datasets for diagnostics.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Dataset {
    Streets,
    Stops,
    RouteStops,
    Routes,
    Blocks,
}

impl Dataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Streets    => "streets",
            Dataset::Stops      => "stops",
            Dataset::RouteStops => "route stops",
            Dataset::Routes     => "routes",
            Dataset::Blocks     => "blocks",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TransitData trait ─────────────────────────────────────────────────────────

/// Read access to the street, stop, and route datasets.
///
/// The lookup methods have linear-scan defaults so a minimal implementation
/// only supplies the four datasets.
pub trait TransitData {
    fn streets(&self) -> &FeatureSet;
    fn stops(&self) -> &FeatureSet;
    fn route_stops(&self) -> &FeatureSet;
    fn routes(&self) -> &FeatureSet;

    /// Census blocks used when publishing results.
    fn blocks(&self) -> Option<&FeatureSet> {
        None
    }

    /// Fid of the physical stop with agency id `stop_id`.
    fn stop_fid(&self, stop_id: StopId) -> Option<FeatureId> {
        self.stops()
            .iter()
            .find(|f| f.attributes.stop_id == Some(stop_id))
            .map(|f| f.fid)
    }

    /// Scheduled departures per hour on `route`.
    fn trips_per_hour(&self, route: RouteKey) -> Option<f64> {
        self.routes()
            .iter()
            .find(|f| f.attributes.route == Some(route))
            .and_then(|f| f.attributes.trips_per_hour)
    }

    fn stop_coordinate(&self, fid: FeatureId) -> Option<Coordinate> {
        self.stops().coordinate(fid)
    }

    fn route_stop_coordinate(&self, fid: FeatureId) -> Option<Coordinate> {
        self.route_stops().coordinate(fid)
    }
}

// ── TransitNetwork ────────────────────────────────────────────────────────────

/// In-memory datasets with hash indexes for the per-expansion lookups.
///
/// Construct once and hand to the search builder; it is never mutated.
pub struct TransitNetwork {
    streets:     FeatureSet,
    stops:       FeatureSet,
    route_stops: FeatureSet,
    routes:      FeatureSet,
    blocks:      Option<FeatureSet>,

    stop_by_id:     HashMap<StopId, FeatureId>,
    stop_pos:       HashMap<FeatureId, usize>,
    route_stop_pos: HashMap<FeatureId, usize>,
    trips_by_route: HashMap<RouteKey, f64>,
}

impl TransitNetwork {
    /// Index the datasets.  Fails if they are not all in the streets' CRS.
    pub fn new(
        streets:     FeatureSet,
        stops:       FeatureSet,
        route_stops: FeatureSet,
        routes:      FeatureSet,
    ) -> NetworkResult<Self> {
        for (dataset, set) in [
            (Dataset::Stops, &stops),
            (Dataset::RouteStops, &route_stops),
            (Dataset::Routes, &routes),
        ] {
            check_crs(dataset, &streets, set)?;
        }

        let mut stop_by_id = HashMap::with_capacity(stops.len());
        let mut stop_pos = HashMap::with_capacity(stops.len());
        for (i, f) in stops.iter().enumerate() {
            stop_pos.entry(f.fid).or_insert(i);
            if let Some(stop_id) = f.attributes.stop_id {
                stop_by_id.entry(stop_id).or_insert(f.fid);
            }
        }

        let mut route_stop_pos = HashMap::with_capacity(route_stops.len());
        for (i, f) in route_stops.iter().enumerate() {
            route_stop_pos.entry(f.fid).or_insert(i);
        }

        // All segments of a route share one schedule; the first one wins.
        let mut trips_by_route = HashMap::new();
        for f in routes.iter() {
            if let (Some(route), Some(trips)) = (f.attributes.route, f.attributes.trips_per_hour) {
                trips_by_route.entry(route).or_insert(trips);
            }
        }

        Ok(Self {
            streets,
            stops,
            route_stops,
            routes,
            blocks: None,
            stop_by_id,
            stop_pos,
            route_stop_pos,
            trips_by_route,
        })
    }

    /// Attach the census-block dataset used by result publishing.
    pub fn with_blocks(mut self, blocks: FeatureSet) -> NetworkResult<Self> {
        check_crs(Dataset::Blocks, &self.streets, &blocks)?;
        self.blocks = Some(blocks);
        Ok(self)
    }
}

fn check_crs(dataset: Dataset, reference: &FeatureSet, set: &FeatureSet) -> NetworkResult<()> {
    if set.crs != reference.crs {
        return Err(NetworkError::CrsMismatch {
            dataset,
            expected: reference.crs.clone(),
            got:      set.crs.clone(),
        });
    }
    Ok(())
}

impl TransitData for TransitNetwork {
    fn streets(&self) -> &FeatureSet {
        &self.streets
    }

    fn stops(&self) -> &FeatureSet {
        &self.stops
    }

    fn route_stops(&self) -> &FeatureSet {
        &self.route_stops
    }

    fn routes(&self) -> &FeatureSet {
        &self.routes
    }

    fn blocks(&self) -> Option<&FeatureSet> {
        self.blocks.as_ref()
    }

    fn stop_fid(&self, stop_id: StopId) -> Option<FeatureId> {
        self.stop_by_id.get(&stop_id).copied()
    }

    fn trips_per_hour(&self, route: RouteKey) -> Option<f64> {
        self.trips_by_route.get(&route).copied()
    }

    fn stop_coordinate(&self, fid: FeatureId) -> Option<Coordinate> {
        let feature = &self.stops.features[*self.stop_pos.get(&fid)?];
        feature.point().map(|p| Coordinate::from_point(p, &self.stops.crs))
    }

    fn route_stop_coordinate(&self, fid: FeatureId) -> Option<Coordinate> {
        let feature = &self.route_stops.features[*self.route_stop_pos.get(&fid)?];
        feature.point().map(|p| Coordinate::from_point(p, &self.route_stops.crs))
    }
}
