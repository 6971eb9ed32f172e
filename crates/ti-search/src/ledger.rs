//! `NodeLedger` — best-known arrival time per node key.
//!
//! # Relaxation policy
//!
//! A candidate label for an already-seen key is accepted only when the
//! budget it leaves exceeds `repeat_search_threshold` times the budget left
//! by the current label:
//!
//! ```text
//! time_limit - candidate  >  threshold * (time_limit - current)
//! ```
//!
//! With the default threshold of 10 a node is re-expanded only when a path
//! is found that leaves an order of magnitude more slack.  This bounds the
//! number of repeat expansions at the cost of occasionally keeping a label
//! that is not the true minimum.
//!
//! Besides [`relax`][NodeLedger::relax], which gates frontier insertion, the
//! ledger accepts plain minimum updates ([`record`][NodeLedger::record],
//! [`record_along_route`][NodeLedger::record_along_route]).  These mark nodes
//! as reached without queueing them.  Every write lowers a label; no label
//! ever goes up and no key is ever removed.

use std::collections::BTreeMap;

use ti_core::FeatureId;

use crate::NodeKey;

#[cfg(feature = "fx-hash")]
type KeyMap<V> = rustc_hash::FxHashMap<FeatureId, V>;
#[cfg(not(feature = "fx-hash"))]
type KeyMap<V> = std::collections::HashMap<FeatureId, V>;

/// Arrival-time labels for one search run.
#[derive(Clone, Debug)]
pub struct NodeLedger {
    time_limit:              f64,
    repeat_search_threshold: f64,
    origin:                  Option<f64>,
    walk:                    KeyMap<f64>,
    transit:                 KeyMap<f64>,
    repeat_count:            usize,
}

impl NodeLedger {
    pub fn new(time_limit: f64, repeat_search_threshold: f64) -> Self {
        Self {
            time_limit,
            repeat_search_threshold,
            origin: None,
            walk: KeyMap::default(),
            transit: KeyMap::default(),
            repeat_count: 0,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Current label for `key`, if it has been reached.
    #[inline]
    pub fn current(&self, key: NodeKey) -> Option<f64> {
        match key {
            NodeKey::Origin       => self.origin,
            NodeKey::Walk(fid)    => self.walk.get(&fid).copied(),
            NodeKey::Transit(fid) => self.transit.get(&fid).copied(),
        }
    }

    /// Label the origin with departure time `0`.
    ///
    /// The origin is admitted unconditionally, even with a zero budget.
    pub fn admit_origin(&mut self) {
        self.origin = Some(0.0);
    }

    /// Try to improve `key` to `candidate`.
    ///
    /// Returns `true` (and updates the label) if `key` is unseen or the
    /// candidate clears the repeat threshold; `false` leaves the ledger
    /// untouched.  Candidates at or beyond the time limit are always
    /// rejected.
    pub fn relax(&mut self, key: NodeKey, candidate: f64) -> bool {
        if !(candidate < self.time_limit) {
            return false;
        }

        match self.current(key) {
            None => {
                self.set(key, candidate);
                true
            }
            Some(current) => {
                let slack = self.time_limit - candidate;
                let current_slack = self.time_limit - current;
                if slack > current_slack * self.repeat_search_threshold {
                    self.set(key, candidate);
                    self.repeat_count += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Lower `key` to `arrival` if that improves it.  No threshold, no
    /// repeat counting.  Returns whether the label changed.
    pub fn record(&mut self, key: NodeKey, arrival: f64) -> bool {
        if !(arrival < self.time_limit) {
            return false;
        }
        match self.current(key) {
            Some(current) if current <= arrival => false,
            _ => {
                self.set(key, arrival);
                true
            }
        }
    }

    /// Record ride arrivals at the stops of one route.
    ///
    /// `arrivals` must be ordered farthest stop first.  Stops are recorded
    /// until the first one whose existing transit label is strictly better
    /// than its candidate; that stop and every stop after it are left
    /// alone.  Returns the number of stops recorded.
    pub fn record_along_route<I>(&mut self, arrivals: I) -> usize
    where
        I: IntoIterator<Item = (FeatureId, f64)>,
    {
        let mut recorded = 0;
        for (route_stop, arrival) in arrivals {
            if !(arrival < self.time_limit) {
                continue;
            }
            if self.transit.get(&route_stop).is_some_and(|&current| current < arrival) {
                break;
            }
            self.transit.insert(route_stop, arrival);
            recorded += 1;
        }
        recorded
    }

    /// Number of accepted relaxations that overwrote an existing label.
    #[inline]
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    pub fn walk_len(&self) -> usize {
        self.walk.len()
    }

    pub fn transit_len(&self) -> usize {
        self.transit.len()
    }

    /// Every label, ordered by key.  Used for diagnostics and run-to-run
    /// comparison.
    pub fn snapshot(&self) -> BTreeMap<NodeKey, f64> {
        let mut out = BTreeMap::new();
        if let Some(t) = self.origin {
            out.insert(NodeKey::Origin, t);
        }
        out.extend(self.walk.iter().map(|(&fid, &t)| (NodeKey::Walk(fid), t)));
        out.extend(self.transit.iter().map(|(&fid, &t)| (NodeKey::Transit(fid), t)));
        out
    }

    fn set(&mut self, key: NodeKey, arrival: f64) {
        match key {
            NodeKey::Origin       => self.origin = Some(arrival),
            NodeKey::Walk(fid)    => {
                self.walk.insert(fid, arrival);
            }
            NodeKey::Transit(fid) => {
                self.transit.insert(fid, arrival);
            }
        }
    }
}
