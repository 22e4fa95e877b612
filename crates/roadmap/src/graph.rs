//! Roadmap graph: vertex registry plus symmetric weighted adjacency lists.
//!
//! Vertices are interned by exact coordinates. Inserting a point that is
//! already registered returns its existing id, so a vertex shared between an
//! obstacle and the roadmap is one vertex. Keys are the coordinates' bit
//! patterns (with `-0.0` folded onto `0.0`), never hashed floats.
//!
//! Invariants:
//! - Every edge is stored on both endpoints with the same weight.
//! - No self-loops; weights are finite and ≥ 0.

use std::collections::HashMap;

use nalgebra::distance;

use crate::geom2::Point;

/// Dense vertex index into a `RoadmapGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct RoadmapGraph {
    points: Vec<Point>,
    adj: Vec<Vec<(VertexId, f64)>>,
    index: HashMap<(u64, u64), VertexId>,
}

#[inline]
fn key(p: &Point) -> (u64, u64) {
    // `+ 0.0` maps -0.0 to 0.0 so both spell the same vertex.
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

impl RoadmapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `p` and return its id (existing id if already present).
    pub fn add_vertex(&mut self, p: Point) -> VertexId {
        if let Some(&id) = self.index.get(&key(&p)) {
            return id;
        }
        let id = VertexId(self.points.len());
        self.points.push(p);
        self.adj.push(Vec::new());
        self.index.insert(key(&p), id);
        id
    }

    /// Id of `p` if it is a vertex.
    pub fn vertex(&self, p: &Point) -> Option<VertexId> {
        self.index.get(&key(p)).copied()
    }

    #[inline]
    pub fn point(&self, v: VertexId) -> Point {
        self.points[v.0]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (VertexId(i), *p))
    }

    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[(VertexId, f64)] {
        &self.adj[v.0]
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v.0].len()
    }

    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<f64> {
        self.adj
            .get(u.0)?
            .iter()
            .find(|(w, _)| *w == v)
            .map(|&(_, weight)| weight)
    }

    /// Insert or overwrite the undirected edge (u, v). Self-loops are refused.
    ///
    /// Returns `true` if the edge is present afterwards.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> bool {
        if u == v {
            return false;
        }
        debug_assert!(weight.is_finite() && weight >= 0.0, "edge weight {weight}");
        self.set_half(u, v, weight);
        self.set_half(v, u, weight);
        true
    }

    /// Insert (u, v) weighted by the Euclidean distance between its endpoints.
    pub fn connect(&mut self, u: VertexId, v: VertexId) -> bool {
        let w = distance(&self.points[u.0], &self.points[v.0]);
        self.add_edge(u, v, w)
    }

    fn set_half(&mut self, from: VertexId, to: VertexId, weight: f64) {
        let list = &mut self.adj[from.0];
        match list.iter_mut().find(|(w, _)| *w == to) {
            Some(entry) => entry.1 = weight,
            None => list.push((to, weight)),
        }
    }

    /// Each undirected edge once, as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, f64)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |(v, _)| u < v.0)
                .map(move |&(v, w)| (VertexId(u), v, w))
        })
    }

    /// Edges as point pairs, for rendering.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
        self.edges()
            .map(|(u, v, w)| (self.points[u.0], self.points[v.0], w))
    }
}
