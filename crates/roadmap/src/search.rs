//! Dijkstra shortest-path search over a `RoadmapGraph`.
//!
//! Label-setting with a binary-heap frontier. Stale heap entries are skipped
//! via the settled flags. When a goal is given the search stops as soon as the
//! goal is settled; otherwise it settles everything reachable. An unreachable
//! goal is a regular outcome (`NoPathFound`), never an error.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::PlanError;
use crate::geom2::Point;
use crate::graph::{RoadmapGraph, VertexId};

/// Distance map plus predecessor links from one start vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    start: VertexId,
    dist: Vec<f64>,
    prev: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    fn new(start: VertexId, n: usize) -> Self {
        Self {
            start,
            dist: vec![f64::INFINITY; n],
            prev: vec![None; n],
        }
    }

    #[inline]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Best known distance from the start (`+inf` if never relaxed).
    pub fn distance(&self, v: VertexId) -> f64 {
        self.dist.get(v.0).copied().unwrap_or(f64::INFINITY)
    }

    /// Distance map indexed by `VertexId`.
    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    pub fn is_reached(&self, v: VertexId) -> bool {
        self.distance(v).is_finite()
    }

    /// Vertices from the start up to, but excluding, `v`.
    ///
    /// Empty for the start itself and for vertices that were never relaxed.
    pub fn predecessors(&self, v: VertexId) -> Vec<VertexId> {
        let mut seq = Vec::new();
        let mut cur = self.prev.get(v.0).copied().flatten();
        while let Some(u) = cur {
            seq.push(u);
            cur = self.prev[u.0];
        }
        seq.reverse();
        seq
    }

    /// Full route start..=v, or `None` when `v` was not reached.
    pub fn route_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reached(v) {
            return None;
        }
        let mut route = self.predecessors(v);
        route.push(v);
        Some(route)
    }

    /// `route_to` mapped to the graph's points.
    pub fn route_points(&self, graph: &RoadmapGraph, v: VertexId) -> Option<Vec<Point>> {
        self.route_to(v)
            .map(|r| r.into_iter().map(|u| graph.point(u)).collect())
    }
}

/// Result of a search run.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Goal settled, or every reachable vertex settled when no goal was given.
    Found(ShortestPaths),
    /// Frontier exhausted before the goal; partial maps are kept.
    NoPathFound(ShortestPaths),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn paths(&self) -> &ShortestPaths {
        match self {
            SearchOutcome::Found(p) | SearchOutcome::NoPathFound(p) => p,
        }
    }

    pub fn into_paths(self) -> ShortestPaths {
        match self {
            SearchOutcome::Found(p) | SearchOutcome::NoPathFound(p) => p,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    node: VertexId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on cost, then on id for a stable settle order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search from `start`, optionally stopping at `goal`.
///
/// A `start` outside the graph yields `NoPathFound` with empty reach.
pub fn shortest_path_from(
    graph: &RoadmapGraph,
    start: VertexId,
    goal: Option<VertexId>,
) -> SearchOutcome {
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::new(start, n);
    if start.0 >= n {
        return SearchOutcome::NoPathFound(paths);
    }
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    paths.dist[start.0] = 0.0;
    heap.push(Frontier {
        cost: 0.0,
        node: start,
    });

    let mut pops = 0usize;
    while let Some(Frontier { cost, node }) = heap.pop() {
        if settled[node.0] {
            continue;
        }
        settled[node.0] = true;
        pops += 1;
        if Some(node) == goal {
            tracing::trace!(settled = pops, cost, "goal settled");
            return SearchOutcome::Found(paths);
        }
        for &(nbr, w) in graph.neighbors(node) {
            if settled[nbr.0] {
                continue;
            }
            let alt = cost + w;
            if alt < paths.dist[nbr.0] {
                paths.dist[nbr.0] = alt;
                paths.prev[nbr.0] = Some(node);
                heap.push(Frontier {
                    cost: alt,
                    node: nbr,
                });
            }
        }
    }
    tracing::trace!(settled = pops, "frontier exhausted");
    match goal {
        Some(_) => SearchOutcome::NoPathFound(paths),
        None => SearchOutcome::Found(paths),
    }
}

/// Vertex id of `p`, or `UnknownVertex` naming `p`.
pub(crate) fn locate(graph: &RoadmapGraph, p: Point) -> Result<VertexId, PlanError> {
    graph
        .vertex(&p)
        .ok_or(PlanError::UnknownVertex { x: p.x, y: p.y })
}

/// Point-keyed entry point: both points must be graph vertices.
pub fn shortest_path(
    graph: &RoadmapGraph,
    start: Point,
    goal: Option<Point>,
) -> Result<SearchOutcome, PlanError> {
    let s = locate(graph, start)?;
    let g = goal.map(|q| locate(graph, q)).transpose()?;
    Ok(shortest_path_from(graph, s, g))
}
