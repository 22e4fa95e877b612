//! Orientation predicates used by every builder.
//!
//! All tests are exact. Zero orientation (collinear) is its own class and never
//! counts as being on either side, so touching configurations do not cross.

use super::types::{Edge, Obstacle, Point};

/// Twice the signed area of triangle (a, b, c); positive when counter-clockwise.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn side(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[inline]
fn strictly_opposite(u: f64, v: f64) -> bool {
    side(u) * side(v) < 0
}

/// Proper crossing of open segments (a, b) and (c, d).
///
/// True iff c and d lie strictly on opposite sides of line ab and a and b lie
/// strictly on opposite sides of line cd. Zero-length segments never cross.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    if a == b || c == d {
        return false;
    }
    strictly_opposite(orientation(a, b, c), orientation(a, b, d))
        && strictly_opposite(orientation(c, d, a), orientation(c, d, b))
}

/// First obstacle edge properly crossed by segment (p1, p2), if any.
///
/// Edges sharing an endpoint with `p1` or `p2` are skipped. The search order is
/// obstacle order then vertex order, so the result is the first hit in that
/// order, not necessarily the nearest one along the segment.
pub fn segment_blocked(p1: Point, p2: Point, obstacles: &[Obstacle]) -> Option<Edge> {
    obstacles
        .iter()
        .flat_map(Obstacle::edges)
        .filter(|e| !e.shares_endpoint(&p1) && !e.shares_endpoint(&p2))
        .find(|e| segments_intersect(p1, p2, e.a, e.b))
}

/// Boolean form of [`segment_blocked`].
#[inline]
pub fn is_blocked(p1: Point, p2: Point, obstacles: &[Obstacle]) -> bool {
    segment_blocked(p1, p2, obstacles).is_some()
}

/// Strict interior test for a convex obstacle.
///
/// `p` must lie on the interior side (same orientation sign as the polygon's
/// winding) of every directed edge. Points on an edge or a vertex are outside.
pub fn point_in_convex_polygon(p: Point, obstacle: &Obstacle) -> bool {
    let winding = side(obstacle.winding());
    obstacle
        .edges()
        .all(|e| side(orientation(e.a, e.b, p)) == winding)
}

/// Whether `p` is strictly inside any obstacle.
pub fn point_in_any(p: Point, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| point_in_convex_polygon(p, o))
}

/// x where the line through `a` and `b` meets the horizontal line at `y`.
///
/// A vertical line returns its shared x. A horizontal line has no unique
/// intercept; `a.x` is returned.
pub fn x_intercept(a: Point, b: Point, y: f64) -> f64 {
    if a.x == b.x || a.y == b.y {
        return a.x;
    }
    a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
}
