use roadmap::{Plan, Point};
use serde::Serialize;

/// Result document written by `plan` and `demo`.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub planner: &'static str,
    pub found: bool,
    pub distance: Option<f64>,
    pub route: Vec<[f64; 2]>,
    pub vertices: usize,
    pub edges: usize,
    /// Cell rings (cell decomposition only).
    pub cells: Vec<Vec<[f64; 2]>>,
    /// Graph edges as `[[x0, y0], [x1, y1]]`.
    pub graph_edges: Vec<[[f64; 2]; 2]>,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl From<&Plan> for PlanReport {
    fn from(plan: &Plan) -> Self {
        Self {
            planner: plan.kind.name(),
            found: plan.outcome.is_found(),
            distance: plan.length(),
            route: plan
                .route()
                .unwrap_or_default()
                .into_iter()
                .map(xy)
                .collect(),
            vertices: plan.graph.vertex_count(),
            edges: plan.graph.edge_count(),
            cells: plan
                .cells
                .iter()
                .map(|c| c.vertices().iter().copied().map(xy).collect())
                .collect(),
            graph_edges: plan
                .graph
                .edge_segments()
                .map(|(a, b, _)| [xy(a), xy(b)])
                .collect(),
        }
    }
}
