//! Unit tests for rd-graph.
//!
//! All tests use small hand-built graphs.

#[cfg(test)]
mod helpers {
    use rd_core::{LocationCode, LocationSet};
    use crate::{RoadGraph, RoadGraphBuilder};

    pub fn code(c: char) -> LocationCode {
        LocationCode(c)
    }

    pub fn locations(codes: &str) -> LocationSet {
        LocationSet::from_pairs(codes.chars().map(|c| (c, format!("loc-{c}")))).unwrap()
    }

    /// Triangle a-b (3), b-c (6), a-c (4).
    ///
    /// a→c is 4 direct; the detour through b costs 9.
    pub fn triangle() -> RoadGraph {
        let mut b = RoadGraphBuilder::new(locations("abc"));
        b.add_edge(code('a'), code('b'), 3).unwrap();
        b.add_edge(code('b'), code('c'), 6).unwrap();
        b.add_edge(code('a'), code('c'), 4).unwrap();
        b.build()
    }

    /// Two components: {a, b} and {c, d}, plus isolated `e`.
    pub fn split() -> RoadGraph {
        let mut b = RoadGraphBuilder::new(locations("abcde"));
        b.add_edge(code('a'), code('b'), 2).unwrap();
        b.add_edge(code('c'), code('d'), 5).unwrap();
        b.build()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::helpers::{code, locations, triangle};
    use crate::{Distance, GraphError, RoadGraphBuilder};

    #[test]
    fn empty_build() {
        let graph = RoadGraphBuilder::new(locations("")).build();
        assert_eq!(graph.location_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn roads_are_stored_both_ways() {
        let graph = triangle();
        assert_eq!(graph.road_count(), 3);
        assert_eq!(graph.edge_count(), 6);
        for e in 0..graph.edge_count() {
            let from = graph.edge_from[e];
            let to   = graph.edge_to[e];
            let w    = graph.edge_weight[e];
            let back = graph
                .out_edges(to)
                .any(|r| graph.edge_to[r.index()] == from && graph.edge_weight[r.index()] == w);
            assert!(back, "edge {e} has no reverse twin");
        }
    }

    #[test]
    fn unknown_endpoint_rejected_without_side_effect() {
        let mut b = RoadGraphBuilder::new(locations("ab"));
        let err = b.add_edge(code('a'), code('z'), 1).unwrap_err();
        assert_eq!(err, GraphError::UnknownLocation(code('z')));
        assert_eq!(b.road_count(), 0);
    }

    #[test]
    fn parallel_roads_are_kept() {
        let mut b = RoadGraphBuilder::new(locations("ab"));
        b.add_edge(code('a'), code('b'), 9).unwrap();
        b.add_edge(code('a'), code('b'), 2).unwrap();
        let graph = b.build();
        assert_eq!(graph.road_count(), 2);
        assert_eq!(graph.shortest_distance(code('a'), code('b')).unwrap(), Distance(2));
    }

    #[test]
    fn neighbours_in_insertion_order() {
        let graph = triangle();
        let n = graph.neighbours(code('a')).unwrap();
        assert_eq!(n, vec![(code('b'), Distance(3)), (code('c'), Distance(4))]);
        assert!(graph.neighbours(code('q')).is_err());
    }

    #[test]
    fn node_ids_follow_code_order() {
        let mut b = RoadGraphBuilder::new(locations("cab"));
        b.add_edge(code('c'), code('a'), 1).unwrap();
        let graph = b.build();
        assert!(graph.node_of(code('a')).unwrap() < graph.node_of(code('b')).unwrap());
        assert!(graph.node_of(code('b')).unwrap() < graph.node_of(code('c')).unwrap());
        let n = graph.node_of(code('c')).unwrap();
        assert_eq!(graph.code_of(n), code('c'));
    }
}

// ── Distance arithmetic ───────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use crate::Distance;

    #[test]
    fn unreachable_is_absorbing() {
        assert_eq!(Distance::UNREACHABLE.saturating_add(Distance(1)), Distance::UNREACHABLE);
        assert_eq!(Distance(1).saturating_add(Distance::UNREACHABLE), Distance::UNREACHABLE);
    }

    #[test]
    fn finite_sums_never_hit_sentinel() {
        let big = Distance::MAX_FINITE;
        assert_eq!(big.saturating_add(big), Distance::MAX_FINITE);
        assert!(big.saturating_add(big).is_reachable());
    }

    #[test]
    fn display() {
        assert_eq!(Distance(4).to_string(), "4 km");
        assert_eq!(Distance::UNREACHABLE.to_string(), "unreachable");
    }
}

// ── Shortest distance ─────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest {
    use super::helpers::{code, locations, split, triangle};
    use crate::{Distance, GraphError, RoadGraphBuilder};

    #[test]
    fn direct_edge_beats_detour() {
        let graph = triangle();
        assert_eq!(graph.shortest_distance(code('a'), code('c')).unwrap(), Distance(4));
    }

    #[test]
    fn symmetric() {
        let graph = triangle();
        for (u, v) in [('a', 'b'), ('b', 'c'), ('a', 'c')] {
            let there = graph.shortest_distance(code(u), code(v)).unwrap();
            let back  = graph.shortest_distance(code(v), code(u)).unwrap();
            assert_eq!(there, back, "{u}-{v}");
        }
        assert_eq!(graph.shortest_distance(code('b'), code('a')).unwrap(), Distance(3));
    }

    #[test]
    fn self_distance_is_zero() {
        let graph = split();
        for c in "abcde".chars() {
            assert_eq!(graph.shortest_distance(code(c), code(c)).unwrap(), Distance::ZERO);
        }
    }

    #[test]
    fn disconnected_is_unreachable() {
        let graph = split();
        assert_eq!(
            graph.shortest_distance(code('a'), code('d')).unwrap(),
            Distance::UNREACHABLE
        );
        assert_eq!(
            graph.shortest_distance(code('e'), code('a')).unwrap(),
            Distance::UNREACHABLE
        );
    }

    #[test]
    fn unknown_location_is_an_error() {
        let graph = triangle();
        assert_eq!(
            graph.shortest_distance(code('a'), code('x')),
            Err(GraphError::UnknownLocation(code('x')))
        );
        assert_eq!(
            graph.shortest_distance(code('x'), code('a')),
            Err(GraphError::UnknownLocation(code('x')))
        );
    }

    #[test]
    fn zero_weight_edges_terminate() {
        let mut b = RoadGraphBuilder::new(locations("abcd"));
        b.add_edge(code('a'), code('b'), 0).unwrap();
        b.add_edge(code('b'), code('c'), 0).unwrap();
        b.add_edge(code('c'), code('a'), 0).unwrap();
        b.add_edge(code('c'), code('d'), 7).unwrap();
        let graph = b.build();
        assert_eq!(graph.shortest_distance(code('a'), code('c')).unwrap(), Distance::ZERO);
        assert_eq!(graph.shortest_distance(code('a'), code('d')).unwrap(), Distance(7));
    }

    #[test]
    fn multi_hop_path() {
        // a-b 1, b-c 1, c-d 1, a-d 10: going round is cheaper.
        let mut b = RoadGraphBuilder::new(locations("abcd"));
        b.add_edge(code('a'), code('b'), 1).unwrap();
        b.add_edge(code('b'), code('c'), 1).unwrap();
        b.add_edge(code('c'), code('d'), 1).unwrap();
        b.add_edge(code('a'), code('d'), 10).unwrap();
        let graph = b.build();
        assert_eq!(graph.shortest_distance(code('a'), code('d')).unwrap(), Distance(3));
    }

    #[test]
    fn distance_table_matches_pairwise() {
        let graph = triangle();
        let table = graph.distances_from(code('b')).unwrap();
        assert_eq!(table.len(), 3);
        for c in "abc".chars() {
            let node = graph.node_of(code(c)).unwrap();
            assert_eq!(table.get(node), graph.shortest_distance(code('b'), code(c)).unwrap());
        }
    }
}

// ── Route reconstruction ──────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::helpers::{code, split, triangle};
    use crate::{Distance, GraphError};

    #[test]
    fn route_stops_and_total() {
        let graph = triangle();
        let route = graph.shortest_route(code('b'), code('c')).unwrap();
        // b→c direct is 6; b→a→c is 7.
        assert_eq!(route.stops, vec![code('b'), code('c')]);
        assert_eq!(route.total, Distance(6));
    }

    #[test]
    fn trivial_route() {
        let graph = triangle();
        let route = graph.shortest_route(code('a'), code('a')).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total, Distance::ZERO);
    }

    #[test]
    fn no_route_between_components() {
        let graph = split();
        assert_eq!(
            graph.shortest_route(code('a'), code('c')),
            Err(GraphError::NoRoute { from: code('a'), to: code('c') })
        );
    }
}
