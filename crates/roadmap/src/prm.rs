//! Probabilistic roadmap (PRM) with an injected, seedable RNG.
//!
//! Model
//! - Start, goal, and the four boundary corners are seeded as unconnected vertices.
//! - Each of `samples` iterations draws one point uniformly from the boundary's
//!   bounding rectangle. Points strictly inside an obstacle are discarded and
//!   the iteration is spent, so fewer than `samples` points may be added.
//! - An accepted point is linked to its `neighbors - 1` nearest existing
//!   vertices (the point itself counts as the nearest) whenever the segment is
//!   unblocked.
//! - Determinism comes only from the RNG; `ReplayToken` builds a reproducible one.

use nalgebra::distance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PlanError;
use crate::geom2::{check_inputs, is_blocked, point_in_any, Point, Workspace};
use crate::graph::{RoadmapGraph, VertexId};

/// PRM sampling configuration.
#[derive(Clone, Copy, Debug)]
pub struct PrmCfg {
    /// Sampling iterations (rejected draws included).
    pub samples: usize,
    /// Neighborhood size including the sample itself; `neighbors - 1` links are tried.
    pub neighbors: usize,
}

impl Default for PrmCfg {
    fn default() -> Self {
        Self {
            samples: 50,
            neighbors: 5,
        }
    }
}

/// Replay token to make PRM runs reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next run of the same series.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over (seed, index).
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Build a PRM roadmap. Start and goal are vertices 0 and 1.
pub fn build_prm<R: Rng>(
    start: Point,
    goal: Point,
    ws: &Workspace,
    cfg: PrmCfg,
    rng: &mut R,
) -> Result<RoadmapGraph, PlanError> {
    check_inputs(start, goal, ws)?;
    let mut graph = RoadmapGraph::new();
    graph.add_vertex(start);
    graph.add_vertex(goal);
    for corner in ws.boundary.corners() {
        graph.add_vertex(*corner);
    }

    let b = &ws.boundary;
    let (x_lo, x_hi, y_lo, y_hi) = (b.x_min(), b.x_max(), b.y_min(), b.y_max());
    let links = cfg.neighbors.saturating_sub(1);
    let mut rejected = 0usize;
    let mut near: Vec<(f64, VertexId)> = Vec::new();
    for _ in 0..cfg.samples {
        let sample = Point::new(rng.gen_range(x_lo..x_hi), rng.gen_range(y_lo..y_hi));
        if point_in_any(sample, &ws.obstacles) {
            rejected += 1;
            continue;
        }
        let id = graph.add_vertex(sample);
        near.clear();
        near.extend(
            graph
                .vertices()
                .filter(|&(v, _)| v != id)
                .map(|(v, q)| (distance(&sample, &q), v)),
        );
        near.sort_by(|a, b| a.0.total_cmp(&b.0));
        for &(d, v) in near.iter().take(links) {
            if !is_blocked(sample, graph.point(v), &ws.obstacles) {
                graph.add_edge(id, v, d);
            }
        }
    }
    tracing::debug!(
        samples = cfg.samples,
        rejected,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "prm built"
    );
    Ok(graph)
}

/// `build_prm` with an RNG derived from `token`.
pub fn build_prm_seeded(
    start: Point,
    goal: Point,
    ws: &Workspace,
    cfg: PrmCfg,
    token: ReplayToken,
) -> Result<RoadmapGraph, PlanError> {
    let mut rng = token.to_std_rng();
    build_prm(start, goal, ws, cfg, &mut rng)
}
