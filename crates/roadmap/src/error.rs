//! Error taxonomy shared by the builders and the point-keyed search entry.
//!
//! Unreachable goals are not errors; see `search::SearchOutcome::NoPathFound`.

use thiserror::Error;

/// Malformed workspace geometry, rejected before any graph is built.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("obstacle needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("obstacle edge {index} has zero length")]
    ZeroLengthEdge { index: usize },

    #[error("obstacle vertices are collinear (zero area)")]
    Collinear,

    #[error("obstacle is not convex: a vertex lies outside edge {index}")]
    NotConvex { index: usize },

    #[error("{what} has a non-finite coordinate ({x}, {y})")]
    NonFinite { what: &'static str, x: f64, y: f64 },

    #[error("boundary has zero width or height")]
    EmptyBoundary,

    #[error("boundary corners do not form an axis-aligned rectangle")]
    NotRectangle,

    #[error("coordinate extent {width} x {height} overflows distance computations")]
    Oversized { width: f64, height: f64 },
}

/// Top-level error for roadmap construction and search.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("point ({x}, {y}) is not a roadmap vertex")]
    UnknownVertex { x: f64, y: f64 },
}
