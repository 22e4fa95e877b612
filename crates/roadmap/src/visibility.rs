//! Visibility graph over start, goal, boundary corners, and obstacle vertices.
//!
//! Two vertices are linked (Euclidean weight) when the segment between them
//! crosses no obstacle edge. Pairs of vertices of the same obstacle are never
//! linked by default; `VisibilityCfg::link_obstacle_neighbors` re-admits the
//! obstacle's own edges while still excluding its diagonals.

use crate::error::PlanError;
use crate::geom2::{check_inputs, is_blocked, Obstacle, Point, Workspace};
use crate::graph::{RoadmapGraph, VertexId};

/// Visibility graph options.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityCfg {
    /// Link consecutive vertices of the same obstacle (boundary-following edges).
    pub link_obstacle_neighbors: bool,
}

/// Build the visibility graph. Start and goal are vertices 0 and 1.
pub fn build_visibility_graph(
    start: Point,
    goal: Point,
    ws: &Workspace,
    cfg: VisibilityCfg,
) -> Result<RoadmapGraph, PlanError> {
    check_inputs(start, goal, ws)?;
    let mut graph = RoadmapGraph::new();
    graph.add_vertex(start);
    graph.add_vertex(goal);
    for corner in ws.boundary.corners() {
        graph.add_vertex(*corner);
    }
    // (obstacle index, vertex index) memberships per roadmap vertex.
    let mut owners: Vec<Vec<(usize, usize)>> = Vec::new();
    for (oi, obstacle) in ws.obstacles.iter().enumerate() {
        for (vi, v) in obstacle.vertices().iter().enumerate() {
            let id = graph.add_vertex(*v);
            if owners.len() <= id.0 {
                owners.resize_with(id.0 + 1, Vec::new);
            }
            owners[id.0].push((oi, vi));
        }
    }
    owners.resize_with(graph.vertex_count(), Vec::new);

    let ids: Vec<VertexId> = (0..graph.vertex_count()).map(VertexId).collect();
    let added = connect_visible_pairs(&mut graph, &ids, &ws.obstacles, |u, v| {
        admit_pair(&owners[u.0], &owners[v.0], &ws.obstacles, cfg)
    });
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = added,
        link_obstacle_neighbors = cfg.link_obstacle_neighbors,
        "visibility graph built"
    );
    Ok(graph)
}

/// Whether a pair may be tested for visibility given obstacle memberships.
fn admit_pair(
    a: &[(usize, usize)],
    b: &[(usize, usize)],
    obstacles: &[Obstacle],
    cfg: VisibilityCfg,
) -> bool {
    let mut shares_obstacle = false;
    for &(oa, va) in a {
        for &(ob, vb) in b {
            if oa != ob {
                continue;
            }
            if cfg.link_obstacle_neighbors && obstacles[oa].are_adjacent(va, vb) {
                return true;
            }
            shares_obstacle = true;
        }
    }
    !shares_obstacle
}

/// Link every admitted unordered pair of `ids` whose segment is unblocked.
///
/// Returns the number of edges added. Shared by the visibility and
/// cell-decomposition builders.
pub(crate) fn connect_visible_pairs<F>(
    graph: &mut RoadmapGraph,
    ids: &[VertexId],
    obstacles: &[Obstacle],
    admit: F,
) -> usize
where
    F: Fn(VertexId, VertexId) -> bool,
{
    let mut added = 0;
    for (i, &u) in ids.iter().enumerate() {
        for &v in &ids[i + 1..] {
            if u == v || !admit(u, v) {
                continue;
            }
            if !is_blocked(graph.point(u), graph.point(v), obstacles) && graph.connect(u, v) {
                added += 1;
            }
        }
    }
    added
}
