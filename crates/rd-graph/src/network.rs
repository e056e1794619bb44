//! Road graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Every road is stored as two directed halves, so the graph is symmetric.
//! Parallel roads between the same pair of locations are kept as separate
//! entries; shortest-path search naturally uses the cheapest one.
//!
//! Node ids are the positions of locations in the [`LocationSet`], which is
//! sorted by code.  Ordering by `NodeId` is therefore ordering by code.

use tracing::debug;

use rd_core::{EdgeId, LocationCode, LocationSet, NodeId};

use crate::router::{DijkstraRouter, Route, Router};
use crate::{Distance, DistanceTable, GraphError, GraphResult};

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Immutable undirected road multigraph over a fixed location set.
///
/// Do not construct directly; use [`RoadGraphBuilder`].  Edges are fixed once
/// built.
pub struct RoadGraph {
    locations: LocationSet,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `location_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each directed edge.  Used for route reconstruction.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Road length.  Used as Dijkstra edge cost.
    pub edge_weight: Vec<Distance>,
}

impl RoadGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed edges (twice the number of roads added).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn road_count(&self) -> usize {
        self.edge_count() / 2
    }

    // ── Code ↔ node mapping ───────────────────────────────────────────────

    /// Dense node index of `code`.
    pub fn node_of(&self, code: LocationCode) -> GraphResult<NodeId> {
        self.locations
            .position(code)
            .map(|i| NodeId(i as u32))
            .ok_or(GraphError::UnknownLocation(code))
    }

    /// Location code of `node`.
    ///
    /// # Panics
    /// Panics if `node` was not issued by this graph.
    pub fn code_of(&self, node: NodeId) -> LocationCode {
        self.locations
            .at(node.index())
            .map(|l| l.code)
            .expect("node id issued by this graph")
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Adjacent locations of `code` with the length of each road, in the
    /// order the roads were added.
    pub fn neighbours(&self, code: LocationCode) -> GraphResult<Vec<(LocationCode, Distance)>> {
        let node = self.node_of(code)?;
        Ok(self
            .out_edges(node)
            .map(|e| (self.code_of(self.edge_to[e.index()]), self.edge_weight[e.index()]))
            .collect())
    }

    // ── Shortest paths ────────────────────────────────────────────────────

    /// Minimal total road length between two locations.
    ///
    /// Returns `Distance::ZERO` when `start == end` and
    /// `Distance::UNREACHABLE` when the graph has no path between them.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownLocation`] if either code is not in the graph's
    /// location set.
    pub fn shortest_distance(&self, start: LocationCode, end: LocationCode) -> GraphResult<Distance> {
        let from = self.node_of(start)?;
        let to   = self.node_of(end)?;
        Ok(DijkstraRouter.distance(self, from, to))
    }

    /// Shortest distances from `start` to every location.
    pub fn distances_from(&self, start: LocationCode) -> GraphResult<DistanceTable> {
        let from = self.node_of(start)?;
        Ok(DijkstraRouter.distances_from(self, from))
    }

    /// Stops visited along a shortest path, endpoints included.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoRoute`] if the locations are disconnected.
    pub fn shortest_route(&self, start: LocationCode, end: LocationCode) -> GraphResult<Route> {
        let from = self.node_of(start)?;
        let to   = self.node_of(end)?;
        DijkstraRouter.route(self, from, to)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rd_core::{LocationCode, LocationSet};
/// use rd_graph::{Distance, RoadGraphBuilder};
///
/// let locations = LocationSet::from_pairs([('a', "Westminster"), ('b', "Camden Town")]).unwrap();
/// let mut b = RoadGraphBuilder::new(locations);
/// b.add_edge(LocationCode('a'), LocationCode('b'), 3).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.road_count(), 1);
/// assert_eq!(
///     graph.shortest_distance(LocationCode('b'), LocationCode('a')).unwrap(),
///     Distance(3),
/// );
/// ```
pub struct RoadGraphBuilder {
    locations: LocationSet,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: Distance,
}

impl RoadGraphBuilder {
    pub fn new(locations: LocationSet) -> Self {
        Self { locations, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of roads.
    pub fn with_capacity(locations: LocationSet, roads: usize) -> Self {
        Self { locations, raw_edges: Vec::with_capacity(roads * 2) }
    }

    fn node(&self, code: LocationCode) -> GraphResult<NodeId> {
        self.locations
            .position(code)
            .map(|i| NodeId(i as u32))
            .ok_or(GraphError::UnknownLocation(code))
    }

    /// Add an undirected road of length `km` between `u` and `v`.
    ///
    /// Adding the same pair twice keeps both roads.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownLocation`] if either code is outside the location
    /// set; nothing is added in that case.
    pub fn add_edge(&mut self, u: LocationCode, v: LocationCode, km: u32) -> GraphResult<()> {
        let from = self.node(u)?;
        let to   = self.node(v)?;
        // Keep the weight finite so it can never masquerade as UNREACHABLE.
        let weight = Distance(km.min(Distance::MAX_FINITE.0));
        self.raw_edges.push(RawEdge { from, to, weight });
        self.raw_edges.push(RawEdge { from: to, to: from, weight });
        Ok(())
    }

    pub fn location_count(&self) -> usize { self.locations.len() }
    pub fn road_count(&self) -> usize { self.raw_edges.len() / 2 }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        let node_count = self.locations.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps each node's roads in insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId>   = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId>   = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<Distance> = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        debug!(locations = node_count, roads = edge_count / 2, "road graph built");

        RoadGraph {
            locations: self.locations,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
        }
    }
}
