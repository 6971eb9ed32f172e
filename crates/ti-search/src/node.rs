//! Search nodes and their ledger keys.

use std::fmt;

use ti_core::{Coordinate, FeatureId, RouteKey};

/// How a node was reached, and therefore which expansion branch runs on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeMode {
    /// The search origin.  Expanded like a walk node.
    Origin,
    /// Standing at a physical stop, about to walk.
    Walk,
    /// Standing at a route stop, about to ride.
    Transit,
}

impl NodeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeMode::Origin  => "origin",
            NodeMode::Walk    => "walk",
            NodeMode::Transit => "transit",
        }
    }
}

/// Identity of a node in the ledger.
///
/// Walk keys are physical-stop fids; transit keys are route-stop fids.  The
/// two fid spaces come from different datasets and never mix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum NodeKey {
    Origin,
    Walk(FeatureId),
    Transit(FeatureId),
}

impl NodeKey {
    #[inline]
    pub fn mode(self) -> NodeMode {
        match self {
            NodeKey::Origin     => NodeMode::Origin,
            NodeKey::Walk(_)    => NodeMode::Walk,
            NodeKey::Transit(_) => NodeMode::Transit,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Origin       => f.write_str("origin"),
            NodeKey::Walk(fid)    => write!(f, "walk {fid}"),
            NodeKey::Transit(fid) => write!(f, "transit {fid}"),
        }
    }
}

/// A pending or expanded search node.
///
/// Two nodes may share a key with different `arrival` values; the ledger
/// decides which one is current.
#[derive(Clone, PartialEq, Debug)]
pub struct SearchNode {
    pub key:        NodeKey,
    /// Arrival time in hours since departure from the origin.
    pub arrival:    f64,
    /// Route to ride from a transit node.
    pub route:      Option<RouteKey>,
    /// Only set on the origin; other nodes resolve through their dataset.
    pub coordinate: Option<Coordinate>,
}

impl SearchNode {
    pub fn origin(coordinate: Coordinate) -> Self {
        Self {
            key:        NodeKey::Origin,
            arrival:    0.0,
            route:      None,
            coordinate: Some(coordinate),
        }
    }

    pub fn walk(stop: FeatureId, arrival: f64) -> Self {
        Self { key: NodeKey::Walk(stop), arrival, route: None, coordinate: None }
    }

    pub fn transit(route_stop: FeatureId, route: RouteKey, arrival: f64) -> Self {
        Self {
            key:        NodeKey::Transit(route_stop),
            arrival,
            route:      Some(route),
            coordinate: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> NodeMode {
        self.key.mode()
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.4}h", self.key, self.arrival)?;
        if let Some(route) = self.route {
            write!(f, " ({route})")?;
        }
        Ok(())
    }
}
