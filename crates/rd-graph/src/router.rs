//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `rd-dispatch` measures cab-to-pickup distances through the [`Router`]
//! trait, so applications can swap in another shortest-path algorithm
//! without touching the dispatch engine.  The default [`DijkstraRouter`] is
//! plenty for city-sized graphs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rd_core::{EdgeId, LocationCode, NodeId};

use crate::network::RoadGraph;
use crate::{Distance, DistanceTable, GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A shortest path: the locations visited in order and the total length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Locations from source to destination, both included.
    pub stops: Vec<LocationCode>,
    pub total: Distance,
}

impl Route {
    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must treat `from == to` as distance zero and report a
/// missing path as [`Distance::UNREACHABLE`], never as an error.
pub trait Router: Send + Sync {
    /// Shortest distance from `from` to `to`.
    fn distance(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Distance;

    /// Shortest distances from `from` to every node of `graph`.
    fn distances_from(&self, graph: &RoadGraph, from: NodeId) -> DistanceTable;

    /// Full shortest path from `from` to `to`.
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> GraphResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
///
/// The frontier is a binary min-heap keyed by `(distance, node)`.  Nodes may
/// be pushed several times; stale entries are skipped when popped.  Because
/// node ids follow location-code order, equal distances pop in code order.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn distance(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Distance {
        if from == to {
            return Distance::ZERO;
        }
        search(graph, from, Some(to)).dist[to.index()]
    }

    fn distances_from(&self, graph: &RoadGraph, from: NodeId) -> DistanceTable {
        DistanceTable { source: from, dist: search(graph, from, None).dist }
    }

    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> GraphResult<Route> {
        if from == to {
            return Ok(Route { stops: vec![graph.code_of(from)], total: Distance::ZERO });
        }
        let state = search(graph, from, Some(to));
        let total = state.dist[to.index()];
        if !total.is_reachable() {
            return Err(GraphError::NoRoute { from: graph.code_of(from), to: graph.code_of(to) });
        }
        Ok(reconstruct(graph, &state.prev_edge, to, total))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct SearchState {
    /// dist[v] = best known distance to v.
    dist:      Vec<Distance>,
    /// prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    prev_edge: Vec<EdgeId>,
}

/// Run Dijkstra from `from`, stopping early once `target` is settled.
fn search(graph: &RoadGraph, from: NodeId, target: Option<NodeId>) -> SearchState {
    let n = graph.location_count();
    let mut dist      = vec![Distance::UNREACHABLE; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = Distance::ZERO;

    // Reverse turns the max-heap into a min-heap; NodeId breaks ties.
    let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }
        if Some(node) == target {
            break;
        }

        for edge in graph.out_edges(node) {
            let neighbour = graph.edge_to[edge.index()];
            let new_cost  = cost.saturating_add(graph.edge_weight[edge.index()]);

            // Strict `<` so zero-weight edges cannot re-queue a settled node.
            if new_cost < dist[neighbour.index()] {
                dist[neighbour.index()] = new_cost;
                prev_edge[neighbour.index()] = edge;
                heap.push(Reverse((new_cost, neighbour)));
            }
        }
    }

    SearchState { dist, prev_edge }
}

fn reconstruct(graph: &RoadGraph, prev_edge: &[EdgeId], to: NodeId, total: Distance) -> Route {
    let mut stops = vec![graph.code_of(to)];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        stops.push(graph.code_of(cur));
    }
    stops.reverse();
    Route { stops, total }
}
