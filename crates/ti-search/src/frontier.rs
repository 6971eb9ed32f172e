//! `PriorityFrontier` — pending expansions ordered by arrival time.
//!
//! Improving a label does not remove the node's older queue entry; the old
//! entry simply goes stale.  [`pop_next`][PriorityFrontier::pop_next] checks
//! each popped entry against the ledger and drops stale ones in a loop, so a
//! long run of superseded entries costs iterations, not stack depth.
//!
//! Entries with equal arrival times pop in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{NodeLedger, SearchNode};

/// Heap entry.  `seq` breaks arrival-time ties first-in, first-out.
struct Entry {
    seq:  u64,
    node: SearchNode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Reversed so `BinaryHeap` (a max-heap) yields the earliest arrival.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .arrival
            .total_cmp(&self.node.arrival)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-queue of search nodes keyed by arrival time.
#[derive(Default)]
pub struct PriorityFrontier {
    heap:          BinaryHeap<Entry>,
    next_seq:      u64,
    stale_skipped: usize,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node`.  Call only after the ledger accepted its label.
    pub fn insert(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, node });
    }

    /// Remove and return the earliest entry that is still current in
    /// `ledger`, discarding stale entries on the way.
    pub fn pop_next(&mut self, ledger: &NodeLedger) -> Option<SearchNode> {
        while let Some(Entry { node, .. }) = self.heap.pop() {
            if ledger.current(node.key) == Some(node.arrival) {
                return Some(node);
            }
            self.stale_skipped += 1;
        }
        None
    }

    /// Queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Stale entries discarded by `pop_next` so far.
    pub fn stale_skipped(&self) -> usize {
        self.stale_skipped
    }
}
