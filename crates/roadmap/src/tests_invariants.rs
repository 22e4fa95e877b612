//! Property tests over random obstacle layouts: every builder yields a
//! symmetric graph without self-loops, and full searches are consistent.

use proptest::prelude::*;

use crate::cell_decomp::build_cell_decomposition;
use crate::geom2::{is_blocked, Boundary, Obstacle, Point, Workspace};
use crate::graph::{RoadmapGraph, VertexId};
use crate::prm::{build_prm_seeded, PrmCfg, ReplayToken};
use crate::search::shortest_path_from;
use crate::visibility::{build_visibility_graph, VisibilityCfg};

/// Squares in distinct 2×2 grid slots of a 10×6 workspace, so they never overlap.
fn layout(slots: &[(usize, usize, f64)]) -> Workspace {
    let mut seen = Vec::new();
    let mut obstacles = Vec::new();
    for &(i, j, side) in slots {
        if seen.contains(&(i, j)) {
            continue;
        }
        seen.push((i, j));
        let (x0, y0) = (2.0 * i as f64 + 0.5, 2.0 * j as f64 + 0.5);
        let square = [(x0, y0), (x0, y0 + side), (x0 + side, y0 + side), (x0 + side, y0)];
        if let Ok(o) = Obstacle::from_coords(&square) {
            obstacles.push(o);
        }
    }
    Workspace::new(Boundary::rect(0.0, 10.0, 0.0, 6.0).unwrap(), obstacles)
}

fn assert_well_formed(graph: &RoadmapGraph, ws: &Workspace) {
    for (u, _) in graph.vertices() {
        for &(v, w) in graph.neighbors(u) {
            assert_ne!(u, v, "self-loop at {u:?}");
            assert!(w >= 0.0 && w.is_finite());
            assert_eq!(graph.weight(v, u), Some(w), "asymmetric edge {u:?}-{v:?}");
        }
    }
    for (a, b, _) in graph.edge_segments() {
        assert!(!is_blocked(a, b, &ws.obstacles));
    }
}

fn assert_search_consistent(graph: &RoadmapGraph) {
    let first = shortest_path_from(graph, VertexId(0), None);
    let again = shortest_path_from(graph, VertexId(0), None);
    assert_eq!(first, again);
    let paths = first.paths();
    assert_eq!(paths.distance(VertexId(0)), 0.0);
    for (u, v, w) in graph.edges() {
        let (du, dv) = (paths.distance(u), paths.distance(v));
        assert!(dv <= du + w + 1e-9 * (1.0 + du.abs()));
        assert!(du <= dv + w + 1e-9 * (1.0 + dv.abs()));
    }
}

fn slots() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0usize..5, 0usize..3, 0.2f64..1.0), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn visibility_graph_is_well_formed(slots in slots(), link in any::<bool>()) {
        let ws = layout(&slots);
        let cfg = VisibilityCfg { link_obstacle_neighbors: link };
        let graph = build_visibility_graph(Point::new(0.1, 0.1), Point::new(9.9, 5.9), &ws, cfg).unwrap();
        assert_well_formed(&graph, &ws);
        assert_search_consistent(&graph);
    }

    #[test]
    fn cell_decomposition_is_well_formed(slots in slots()) {
        let ws = layout(&slots);
        let dec = build_cell_decomposition(Point::new(0.1, 0.1), Point::new(9.9, 5.9), &ws).unwrap();
        assert_well_formed(&dec.graph, &ws);
        assert_search_consistent(&dec.graph);
        for w in dec.cells.windows(2) {
            prop_assert_eq!(w[0].y_range().1, w[1].y_range().0);
        }
        prop_assert_eq!(dec.cells.last().map(|c| c.y_range().1), Some(6.0));
    }

    #[test]
    fn prm_is_well_formed(slots in slots(), seed in any::<u64>(), samples in 0usize..60, k in 1usize..8) {
        let ws = layout(&slots);
        let cfg = PrmCfg { samples, neighbors: k };
        let graph = build_prm_seeded(Point::new(0.1, 0.1), Point::new(9.9, 5.9), &ws, cfg, ReplayToken::new(seed)).unwrap();
        prop_assert!(graph.vertex_count() <= 6 + samples);
        assert_well_formed(&graph, &ws);
        assert_search_consistent(&graph);
    }
}
