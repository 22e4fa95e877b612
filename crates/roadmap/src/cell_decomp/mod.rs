//! Exact cell decomposition: horizontal sweep into trapezoid cells, then a
//! visibility roadmap over the cell centroids.
//!
//! Model
//! - Obstacle vertices are swept by increasing y (stable for ties), followed by
//!   the two top corners of the workspace. Every distinct y-level closes one
//!   cell spanning from the previous level (initially the boundary's bottom).
//! - The cell's sides come from horizontal rays cast from the level's first
//!   vertex to the left and right walls; a ray stopped by an obstacle edge uses
//!   that edge's intercepts at both levels. See `sweep` for the details.
//! - Vertices sharing a y-level join one cell; obstacles between them are not
//!   re-checked.
//!
//! The cells are returned for rendering; only their centroids enter the graph.

mod sweep;

use nalgebra::Vector2;

use crate::error::PlanError;
use crate::geom2::{check_inputs, Point, Workspace};
use crate::graph::{RoadmapGraph, VertexId};
use crate::visibility::connect_visible_pairs;

/// One trapezoid-like region of free space (vertices in ring order, no duplicates).
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    vertices: Vec<Point>,
    lower_y: f64,
    upper_y: f64,
}

impl Cell {
    fn new(vertices: Vec<Point>, lower_y: f64, upper_y: f64) -> Self {
        Self {
            vertices,
            lower_y,
            upper_y,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Sweep levels `(lower, upper)` the cell spans.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (self.lower_y, self.upper_y)
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, v| acc + v.coords);
        Point::from(sum / n)
    }
}

/// Roadmap over cell centroids plus the cells themselves.
#[derive(Clone, Debug)]
pub struct CellDecomposition {
    pub graph: RoadmapGraph,
    pub cells: Vec<Cell>,
}

/// Decompose the workspace and link start, goal, and centroids pairwise.
///
/// Start and goal are vertices 0 and 1; centroids follow in cell order
/// (a centroid equal to an earlier vertex reuses it).
pub fn build_cell_decomposition(
    start: Point,
    goal: Point,
    ws: &Workspace,
) -> Result<CellDecomposition, PlanError> {
    check_inputs(start, goal, ws)?;
    let cells = sweep::decompose(ws);

    let mut graph = RoadmapGraph::new();
    graph.add_vertex(start);
    graph.add_vertex(goal);
    for cell in &cells {
        graph.add_vertex(cell.centroid());
    }
    let ids: Vec<VertexId> = (0..graph.vertex_count()).map(VertexId).collect();
    let added = connect_visible_pairs(&mut graph, &ids, &ws.obstacles, |_, _| true);
    tracing::debug!(
        cells = cells.len(),
        vertices = graph.vertex_count(),
        edges = added,
        "cell decomposition built"
    );
    Ok(CellDecomposition { graph, cells })
}

#[cfg(test)]
mod tests;
