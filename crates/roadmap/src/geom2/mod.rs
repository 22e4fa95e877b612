//! Planar workspace geometry (exact predicates, no tolerances).
//!
//! Purpose
//! - Describe the workspace every roadmap builder consumes: a rectangular
//!   `Boundary` and a list of convex `Obstacle`s.
//! - Provide the orientation-based predicates the builders share: proper
//!   segment crossing, first blocking edge, strict point-in-convex-polygon,
//!   and the horizontal intercept used by the sweep.
//!
//! Conventions
//! - Points compare by exact value. Callers that need a vertex shared between
//!   an obstacle and a roadmap must reuse the identical coordinates.
//! - Touching and collinear configurations are never crossings; a segment that
//!   only grazes an obstacle vertex is visible.

mod predicates;
mod types;

pub use predicates::{
    is_blocked, orientation, point_in_any, point_in_convex_polygon, segment_blocked,
    segments_intersect, x_intercept,
};
pub use types::{Boundary, Edge, Obstacle, Point, Workspace};

/// Euclidean distance between two points.
pub use nalgebra::distance;

pub(crate) use types::check_inputs;
