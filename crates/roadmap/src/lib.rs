//! Roadmap path planning for a point robot among convex polygonal obstacles.
//!
//! Three builders reduce the free space of a rectangular workspace to a
//! weighted undirected graph, and one Dijkstra search runs over it:
//! - `visibility`: obstacle corners that see each other;
//! - `cell_decomp`: horizontal sweep into cells, linked through their centroids;
//! - `prm`: uniform samples linked to their nearest neighbors.
//!
//! Rendering is left to callers. Graphs expose their edges as point pairs,
//! the cell decomposition returns its cells, and searches return route points.
//!
//! API Policy
//! - The crate is internal to this workspace. There is no stable public API;
//!   breaking changes are fine when they improve the design.

pub mod cell_decomp;
pub mod error;
pub mod geom2;
pub mod graph;
pub mod planner;
pub mod prm;
pub mod search;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, PlanError};
pub use geom2::{Boundary, Obstacle, Point, Workspace};
pub use graph::{RoadmapGraph, VertexId};
pub use planner::{plan, plan_with_defaults, Plan, PlannerCfg, PlannerKind};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cell_decomp::{build_cell_decomposition, Cell, CellDecomposition};
    pub use crate::error::{GeometryError, PlanError};
    pub use crate::geom2::{
        distance, is_blocked, point_in_convex_polygon, segment_blocked, segments_intersect,
        Boundary, Edge, Obstacle, Point, Workspace,
    };
    pub use crate::graph::{RoadmapGraph, VertexId};
    pub use crate::planner::{plan, plan_with_defaults, Plan, PlannerCfg, PlannerKind};
    pub use crate::prm::{build_prm, build_prm_seeded, PrmCfg, ReplayToken};
    pub use crate::search::{shortest_path, shortest_path_from, SearchOutcome, ShortestPaths};
    pub use crate::visibility::{build_visibility_graph, VisibilityCfg};
}

#[cfg(test)]
mod tests_invariants;
