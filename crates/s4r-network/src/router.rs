//! Single-source shortest paths over the current `driving_time` weights.
//!
//! # Determinism
//!
//! Dijkstra's min-heap is keyed by `(driving_time, dense_node_index)` so
//! ties on weight are broken by node index — this keeps the predecessor map
//! identical across workers given identical networks, per §9's "Deterministic
//! Dijkstra" design note. `f64::total_cmp` gives a total order over the
//! weight component without the panics a naive `PartialOrd::partial_cmp`
//! would risk (driving times are always finite and positive, so NaN never
//! arises, but `total_cmp` costs nothing and removes the possibility
//! entirely).
//!
//! # Source convention
//!
//! Per §4.1: "source absent, all others present iff reachable." The returned
//! map has no entry for `source` itself; every other reachable node maps to
//! its immediate predecessor on a shortest path from `source`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use s4r_core::NodeId;

use crate::network::StreetNetwork;
use crate::error::{NetworkError, NetworkResult};

/// Min-heap entry: driving time so far, and the dense node index reached.
/// `total_cmp` on the `f64` gives a total order; the `u32` breaks ties.
#[derive(Copy, Clone, PartialEq)]
struct HeapKey(f64, u32);

impl Eq for HeapKey {}

impl PartialOrd for HeapKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
    }
}

/// Predecessor map from each reachable node (except `source`) to its
/// immediate predecessor on a shortest path from `source`.
pub type Predecessors = HashMap<NodeId, NodeId>;

impl StreetNetwork {
    /// Compute shortest paths from `source` to every reachable node, using
    /// the network's current `driving_time` weights.
    ///
    /// Fails with [`NetworkError::PreconditionFailed`] if `source` doesn't
    /// exist. An isolated `source` (or one with no outgoing streets) yields
    /// an empty map.
    pub fn shortest_paths_from(&self, source: NodeId) -> NetworkResult<Predecessors> {
        let source_dense = self.dense_index_of(source).ok_or_else(|| {
            NetworkError::PreconditionFailed(format!("source node {source} not found"))
        })?;

        let n = self.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev_dense: Vec<Option<u32>> = vec![None; n];

        dist[source_dense as usize] = 0.0;

        let mut heap: BinaryHeap<Reverse<HeapKey>> = BinaryHeap::new();
        heap.push(Reverse(HeapKey(0.0, source_dense)));

        while let Some(Reverse(HeapKey(cost, node))) = heap.pop() {
            if cost > dist[node as usize] {
                continue; // stale heap entry
            }

            for &(neighbor, street) in self.adjacency_dense(node) {
                let weight = self.driving_time(street);
                let new_cost = cost + weight;
                if new_cost < dist[neighbor as usize] {
                    dist[neighbor as usize] = new_cost;
                    prev_dense[neighbor as usize] = Some(node);
                    heap.push(Reverse(HeapKey(new_cost, neighbor)));
                }
            }
        }

        let mut predecessors = Predecessors::with_capacity(n);
        for (dense, pred) in prev_dense.into_iter().enumerate() {
            if let Some(pred_dense) = pred {
                predecessors.insert(
                    self.dense_node_id(dense as u32),
                    self.dense_node_id(pred_dense),
                );
            }
        }
        Ok(predecessors)
    }
}
