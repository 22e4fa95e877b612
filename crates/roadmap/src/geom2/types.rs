//! Workspace types: points, obstacle edges, convex obstacles, boundary.
//!
//! - `Point`: `nalgebra::Point2<f64>`; identity is exact coordinate equality.
//! - `Obstacle`: convex polygon with ≥3 vertices, validated on construction.
//! - `Boundary`: four corners ordered (bottom-left, top-left, top-right, bottom-right).
//! - `Workspace`: boundary plus obstacles, the input of every builder.

use nalgebra::Point2;

use crate::error::GeometryError;

pub type Point = Point2<f64>;

/// Obstacle edge from `a` to `b` (polygon traversal order).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn shares_endpoint(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }
}

/// Convex polygonal obstacle.
///
/// Invariants:
/// - At least 3 vertices, all finite.
/// - No zero-length edge (consecutive vertices differ, including last→first).
/// - Non-zero signed area; its sign is the traversal winding.
/// - Convex: every vertex lies on the inner side of (or on) every edge line.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    vertices: Vec<Point>,
    winding: f64,
}

impl Obstacle {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices { count: n });
        }
        for v in &vertices {
            ensure_finite(v, "obstacle vertex")?;
        }
        for k in 0..n {
            if vertices[k] == vertices[(k + 1) % n] {
                return Err(GeometryError::ZeroLengthEdge { index: k });
            }
        }
        let area = signed_area(&vertices);
        if area == 0.0 {
            return Err(GeometryError::Collinear);
        }
        // Weak inner side of every edge; rejects reflex vertices and self-crossings.
        for k in 0..n {
            let (a, b) = (vertices[k], vertices[(k + 1) % n]);
            if vertices
                .iter()
                .any(|&v| super::orientation(a, b, v) * area < 0.0)
            {
                return Err(GeometryError::NotConvex { index: k });
            }
        }
        Ok(Self {
            vertices,
            winding: area.signum(),
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges in traversal order, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| Edge::new(self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// `+1.0` for counter-clockwise traversal, `-1.0` for clockwise.
    #[inline]
    pub fn winding(&self) -> f64 {
        self.winding
    }

    /// Whether vertex indices `i` and `j` are joined by one of the obstacle's edges.
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        let n = self.vertices.len();
        i != j && ((i + 1) % n == j || (j + 1) % n == i)
    }
}

/// Shoelace signed area; positive for counter-clockwise order.
fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut twice = 0.0;
    for k in 0..n {
        let p = vertices[k];
        let q = vertices[(k + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Rectangular workspace limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    corners: [Point; 4],
}

impl Boundary {
    /// Axis-aligned rectangle from its four corners in any order.
    ///
    /// Corners are stored as (bottom-left, top-left, top-right, bottom-right).
    pub fn new(corners: [Point; 4]) -> Result<Self, GeometryError> {
        for c in &corners {
            ensure_finite(c, "boundary corner")?;
        }
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for c in &corners {
            x_min = x_min.min(c.x);
            x_max = x_max.max(c.x);
            y_min = y_min.min(c.y);
            y_max = y_max.max(c.y);
        }
        if x_max <= x_min || y_max <= y_min {
            return Err(GeometryError::EmptyBoundary);
        }
        check_extent(x_max - x_min, y_max - y_min)?;
        let ordered = [
            Point::new(x_min, y_min),
            Point::new(x_min, y_max),
            Point::new(x_max, y_max),
            Point::new(x_max, y_min),
        ];
        if !ordered.iter().all(|q| corners.contains(q)) {
            return Err(GeometryError::NotRectangle);
        }
        Ok(Self { corners: ordered })
    }

    /// Axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
    pub fn rect(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, GeometryError> {
        Self::new([
            Point::new(x_min, y_min),
            Point::new(x_min, y_max),
            Point::new(x_max, y_max),
            Point::new(x_max, y_min),
        ])
    }

    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }
    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.corners[0]
    }
    #[inline]
    pub fn top_left(&self) -> Point {
        self.corners[1]
    }
    #[inline]
    pub fn top_right(&self) -> Point {
        self.corners[2]
    }
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.corners[3]
    }

    pub fn x_min(&self) -> f64 {
        self.corners.iter().map(|c| c.x).fold(f64::INFINITY, f64::min)
    }
    pub fn x_max(&self) -> f64 {
        self.corners.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max)
    }
    pub fn y_min(&self) -> f64 {
        self.corners.iter().map(|c| c.y).fold(f64::INFINITY, f64::min)
    }
    pub fn y_max(&self) -> f64 {
        self.corners.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Boundary plus obstacles.
#[derive(Clone, Debug)]
pub struct Workspace {
    pub boundary: Boundary,
    pub obstacles: Vec<Obstacle>,
}

impl Workspace {
    pub fn new(boundary: Boundary, obstacles: Vec<Obstacle>) -> Self {
        Self {
            boundary,
            obstacles,
        }
    }

    pub fn empty(boundary: Boundary) -> Self {
        Self::new(boundary, Vec::new())
    }

    /// Index of the first obstacle whose interior strictly contains `p`.
    pub fn obstacle_containing(&self, p: Point) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| super::point_in_convex_polygon(p, o))
    }
}

fn ensure_finite(p: &Point, what: &'static str) -> Result<(), GeometryError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what, x: p.x, y: p.y })
    }
}

/// Any two points within a `width` x `height` box must have a finite distance.
fn check_extent(width: f64, height: f64) -> Result<(), GeometryError> {
    if (width * width + height * height).is_finite() {
        Ok(())
    } else {
        Err(GeometryError::Oversized { width, height })
    }
}

/// Validate the inputs shared by every builder.
///
/// All points (boundary, obstacles, endpoints) must fit in a box whose
/// diagonal is finite. An endpoint inside an obstacle is allowed (the
/// builders still run) but logged.
pub(crate) fn check_inputs(
    start: Point,
    goal: Point,
    ws: &Workspace,
) -> Result<(), GeometryError> {
    ensure_finite(&start, "start")?;
    ensure_finite(&goal, "goal")?;
    let b = &ws.boundary;
    let (mut lo, mut hi) = (Point::new(b.x_min(), b.y_min()), Point::new(b.x_max(), b.y_max()));
    let points = ws.obstacles.iter().flat_map(|o| o.vertices().iter().copied());
    for q in points.chain([start, goal]) {
        lo = Point::new(lo.x.min(q.x), lo.y.min(q.y));
        hi = Point::new(hi.x.max(q.x), hi.y.max(q.y));
    }
    check_extent(hi.x - lo.x, hi.y - lo.y)?;
    for (what, p) in [("start", start), ("goal", goal)] {
        if let Some(idx) = ws.obstacle_containing(p) {
            tracing::warn!(endpoint = what, x = p.x, y = p.y, obstacle = idx, "endpoint inside obstacle");
        }
    }
    Ok(())
}
