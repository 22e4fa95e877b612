//! Sweep and roadmap tests, including the same-y and ray-stopping edge cases.

use super::*;
use crate::error::PlanError;
use crate::geom2::{Boundary, Obstacle};
use crate::search::shortest_path;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn demo_ws() -> Workspace {
    Workspace::new(
        Boundary::rect(0.0, 10.0, 0.0, 6.0).unwrap(),
        vec![
            Obstacle::from_coords(&[(3.0, 3.0), (3.0, 4.0), (5.0, 4.0), (5.0, 3.0)]).unwrap(),
            Obstacle::from_coords(&[(7.0, 2.0), (7.0, 4.0), (8.0, 2.0)]).unwrap(),
        ],
    )
}

fn cell_at(cells: &[Cell], lower: f64, upper: f64) -> &Cell {
    cells
        .iter()
        .find(|c| c.y_range() == (lower, upper))
        .expect("cell for level")
}

#[test]
fn empty_workspace_is_a_single_cell() {
    let ws = Workspace::empty(Boundary::rect(0.0, 10.0, 0.0, 6.0).unwrap());
    let (s, g) = (p(1.0, 1.0), p(9.0, 5.0));
    let dec = build_cell_decomposition(s, g, &ws).unwrap();
    assert_eq!(dec.cells.len(), 1);
    let cell = &dec.cells[0];
    assert_eq!(cell.vertices().len(), 4);
    for corner in ws.boundary.corners() {
        assert!(cell.vertices().contains(corner));
    }
    assert_eq!(cell.centroid(), p(5.0, 3.0));

    let graph = &dec.graph;
    assert_eq!(graph.vertex_count(), 3);
    let c = graph.vertex(&p(5.0, 3.0)).unwrap();
    assert!(graph.weight(VertexId(0), c).is_some());
    assert!(graph.weight(VertexId(1), c).is_some());
}

#[test]
fn one_cell_per_distinct_level() {
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 4.0), &demo_ws()).unwrap();
    let ranges: Vec<(f64, f64)> = dec.cells.iter().map(Cell::y_range).collect();
    assert_eq!(ranges, vec![(0.0, 2.0), (2.0, 3.0), (3.0, 4.0), (4.0, 6.0)]);
    // Top cell spans the whole width.
    let top = cell_at(&dec.cells, 4.0, 6.0);
    assert_eq!(top.centroid(), p(5.0, 5.0));
}

#[test]
fn same_level_vertices_share_a_cell() {
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 4.0), &demo_ws()).unwrap();
    let cell = cell_at(&dec.cells, 3.0, 4.0);
    for v in [p(3.0, 4.0), p(5.0, 4.0), p(7.0, 4.0)] {
        assert!(cell.vertices().contains(&v));
    }
}

#[test]
fn ray_stopped_by_obstacle_uses_edge_intercepts() {
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 4.0), &demo_ws()).unwrap();
    // From (3, 3) the right ray meets the triangle's vertical edge at x = 7.
    let cell = cell_at(&dec.cells, 2.0, 3.0);
    assert!(cell.vertices().contains(&p(7.0, 3.0)));
    assert!(cell.vertices().contains(&p(7.0, 2.0)));
    assert!(!cell.vertices().contains(&p(10.0, 3.0)));
    // Left side is the wall.
    assert!(cell.vertices().contains(&p(0.0, 3.0)));
    assert!(cell.vertices().contains(&p(0.0, 2.0)));
}

#[test]
fn ray_touching_a_vertex_reaches_the_wall() {
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 4.0), &demo_ws()).unwrap();
    // From (7, 2) the right ray passes through the triangle vertex (8, 2).
    let cell = cell_at(&dec.cells, 0.0, 2.0);
    assert!(cell.vertices().contains(&p(10.0, 2.0)));
    assert!(cell.vertices().contains(&p(10.0, 0.0)));
}

#[test]
fn nearest_crossed_edge_bounds_the_cell() {
    let ws = Workspace::new(
        Boundary::rect(0.0, 10.0, 0.0, 6.0).unwrap(),
        vec![
            // Listed first but farther along the ray.
            Obstacle::from_coords(&[(8.0, 1.0), (8.0, 5.0), (9.0, 5.0), (9.0, 1.0)]).unwrap(),
            Obstacle::from_coords(&[(5.0, 1.0), (5.0, 5.0), (6.0, 5.0), (6.0, 1.0)]).unwrap(),
            Obstacle::from_coords(&[(2.0, 2.5), (2.0, 3.5), (3.0, 3.0)]).unwrap(),
        ],
    );
    let dec = build_cell_decomposition(p(1.0, 0.5), p(9.5, 0.5), &ws).unwrap();
    let cell = cell_at(&dec.cells, 2.5, 3.0);
    assert!(cell.vertices().contains(&p(5.0, 3.0)));
    assert!(cell.vertices().contains(&p(5.0, 2.5)));
    assert!(!cell.vertices().contains(&p(8.0, 3.0)));
    // The left ray from (3, 3) is stopped by the triangle's own far edge.
    assert!(cell.vertices().contains(&p(2.0, 3.0)));
}

#[test]
fn duplicate_vertices_appear_once_per_cell() {
    let ws = Workspace::new(
        Boundary::rect(0.0, 10.0, 0.0, 6.0).unwrap(),
        vec![
            Obstacle::from_coords(&[(4.0, 2.0), (5.0, 3.0), (6.0, 2.0)]).unwrap(),
            Obstacle::from_coords(&[(4.0, 4.0), (6.0, 4.0), (5.0, 3.0)]).unwrap(),
        ],
    );
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 5.0), &ws).unwrap();
    let cell = cell_at(&dec.cells, 2.0, 3.0);
    let count = cell
        .vertices()
        .iter()
        .filter(|v| **v == p(5.0, 3.0))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn demo_scenario_finds_a_route_through_centroids() {
    let ws = demo_ws();
    let (s, g) = (p(1.0, 1.0), p(9.0, 4.0));
    let dec = build_cell_decomposition(s, g, &ws).unwrap();
    assert_eq!(dec.graph.vertex(&s), Some(VertexId(0)));
    assert_eq!(dec.graph.vertex(&g), Some(VertexId(1)));
    // The straight line is blocked by the triangle.
    assert_eq!(dec.graph.weight(VertexId(0), VertexId(1)), None);
    let outcome = shortest_path(&dec.graph, s, Some(g)).unwrap();
    assert!(outcome.is_found());
    let route = outcome.paths().route_points(&dec.graph, VertexId(1)).unwrap();
    assert_eq!(route.first(), Some(&s));
    assert_eq!(route.last(), Some(&g));
    assert!(route.len() > 2);
}

#[test]
fn rejects_non_finite_goal() {
    let err = build_cell_decomposition(p(1.0, 1.0), p(f64::INFINITY, 1.0), &demo_ws());
    assert!(matches!(err, Err(PlanError::InvalidGeometry(_))));
}

#[test]
fn counter_clockwise_boundary_still_yields_a_single_cell() {
    let boundary = Boundary::new([p(0.0, 0.0), p(10.0, 0.0), p(10.0, 6.0), p(0.0, 6.0)]).unwrap();
    let dec = build_cell_decomposition(p(1.0, 1.0), p(9.0, 5.0), &Workspace::empty(boundary)).unwrap();
    assert_eq!(dec.cells.len(), 1);
    assert_eq!(dec.cells[0].y_range(), (0.0, 6.0));
    assert_eq!(dec.cells[0].centroid(), p(5.0, 3.0));
}
