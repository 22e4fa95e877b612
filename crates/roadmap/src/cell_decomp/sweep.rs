//! Horizontal sweep producing the decomposition cells.
//!
//! Each y-level of the event list closes one cell between the previous level
//! and the current one. The cell's left side comes from a ray cast from the
//! level's first vertex to the left wall:
//! - unblocked: the wall itself at both levels;
//! - blocked: the nearest properly crossed obstacle edge, evaluated (as a line)
//!   at both levels.
//! The right side is symmetric. Rays that only touch an obstacle vertex are not
//! stopped by it, since touching is not a proper crossing.

use crate::geom2::{segments_intersect, x_intercept, Edge, Obstacle, Point, Workspace};

use super::Cell;

pub(super) fn decompose(ws: &Workspace) -> Vec<Cell> {
    let b = &ws.boundary;
    let mut events: Vec<Point> = ws
        .obstacles
        .iter()
        .flat_map(|o| o.vertices().iter().copied())
        .collect();
    // `sort_by` is stable: equal-y vertices keep obstacle/vertex order.
    events.sort_by(|p, q| p.y.total_cmp(&q.y));
    events.push(b.top_left());
    events.push(b.top_right());

    let (x_left, x_right) = (b.x_min(), b.x_max());
    let mut cells = Vec::new();
    let mut prev_y = b.bottom_left().y;
    let mut i = 0;
    while i < events.len() {
        let y = events[i].y;
        let mut j = i + 1;
        while j < events.len() && events[j].y == y {
            j += 1;
        }
        let level = &events[i..j];
        let origin = level[0];
        let [left_cur, left_prev] = side_points(origin, x_left, prev_y, &ws.obstacles);
        let [right_cur, right_prev] = side_points(origin, x_right, prev_y, &ws.obstacles);

        // Ring: lower side left→right, right side up, level vertices right→left, left side.
        let mut top: Vec<Point> = level.to_vec();
        top.sort_by(|p, q| q.x.total_cmp(&p.x));
        let mut ring: Vec<Point> = Vec::with_capacity(level.len() + 4);
        for v in [left_prev, right_prev, right_cur]
            .into_iter()
            .chain(top)
            .chain([left_cur])
        {
            if !ring.contains(&v) {
                ring.push(v);
            }
        }
        tracing::trace!(y, prev_y, vertices = ring.len(), "sweep level");
        cells.push(Cell::new(ring, prev_y, y));
        prev_y = y;
        i = j;
    }
    cells
}

/// Cell side toward `wall_x` as `[at origin level, at previous level]`.
fn side_points(origin: Point, wall_x: f64, prev_y: f64, obstacles: &[Obstacle]) -> [Point; 2] {
    match cast_ray(origin, wall_x, obstacles) {
        Some(e) => [
            Point::new(x_intercept(e.a, e.b, origin.y), origin.y),
            Point::new(x_intercept(e.a, e.b, prev_y), prev_y),
        ],
        None => [Point::new(wall_x, origin.y), Point::new(wall_x, prev_y)],
    }
}

/// Nearest obstacle edge properly crossed by the horizontal ray from `origin`
/// to the wall at `wall_x`. A zero-length ray is never blocked.
fn cast_ray(origin: Point, wall_x: f64, obstacles: &[Obstacle]) -> Option<Edge> {
    let target = Point::new(wall_x, origin.y);
    if target == origin {
        return None;
    }
    obstacles
        .iter()
        .flat_map(Obstacle::edges)
        .filter(|e| !e.shares_endpoint(&origin) && !e.shares_endpoint(&target))
        .filter(|e| segments_intersect(origin, target, e.a, e.b))
        .map(|e| ((x_intercept(e.a, e.b, origin.y) - origin.x).abs(), e))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, e)| e)
}
