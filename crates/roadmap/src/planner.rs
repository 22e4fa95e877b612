//! One-call planning: build the chosen roadmap, then search it.

use rand::Rng;

use crate::cell_decomp::{build_cell_decomposition, Cell};
use crate::error::PlanError;
use crate::geom2::{Point, Workspace};
use crate::graph::{RoadmapGraph, VertexId};
use crate::prm::{build_prm, PrmCfg, ReplayToken};
use crate::search::{locate, shortest_path_from, SearchOutcome};
use crate::visibility::{build_visibility_graph, VisibilityCfg};

/// Roadmap construction method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerKind {
    Visibility,
    CellDecomposition,
    Prm,
}

impl PlannerKind {
    pub fn name(self) -> &'static str {
        match self {
            PlannerKind::Visibility => "visibility",
            PlannerKind::CellDecomposition => "cell_decomposition",
            PlannerKind::Prm => "prm",
        }
    }
}

/// Per-builder options; unused sections are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlannerCfg {
    pub visibility: VisibilityCfg,
    pub prm: PrmCfg,
}

/// Roadmap, cells (cell decomposition only), and search outcome.
#[derive(Clone, Debug)]
pub struct Plan {
    pub kind: PlannerKind,
    pub graph: RoadmapGraph,
    pub cells: Vec<Cell>,
    pub start: VertexId,
    pub goal: VertexId,
    pub outcome: SearchOutcome,
}

impl Plan {
    /// Route points start..=goal when a path was found.
    pub fn route(&self) -> Option<Vec<Point>> {
        if !self.outcome.is_found() {
            return None;
        }
        self.outcome.paths().route_points(&self.graph, self.goal)
    }

    /// Path length, `None` when the goal is unreachable.
    pub fn length(&self) -> Option<f64> {
        let d = self.outcome.paths().distance(self.goal);
        d.is_finite().then_some(d)
    }
}

pub fn plan<R: Rng>(
    kind: PlannerKind,
    start: Point,
    goal: Point,
    ws: &Workspace,
    cfg: PlannerCfg,
    rng: &mut R,
) -> Result<Plan, PlanError> {
    let (graph, cells) = match kind {
        PlannerKind::Visibility => (
            build_visibility_graph(start, goal, ws, cfg.visibility)?,
            Vec::new(),
        ),
        PlannerKind::CellDecomposition => {
            let dec = build_cell_decomposition(start, goal, ws)?;
            (dec.graph, dec.cells)
        }
        PlannerKind::Prm => (build_prm(start, goal, ws, cfg.prm, rng)?, Vec::new()),
    };
    // Builders insert start first; a goal equal to the start reuses vertex 0.
    let s = locate(&graph, start)?;
    let g = locate(&graph, goal)?;
    let outcome = shortest_path_from(&graph, s, Some(g));
    tracing::debug!(
        planner = kind.name(),
        found = outcome.is_found(),
        distance = outcome.paths().distance(g),
        "plan finished"
    );
    Ok(Plan {
        kind,
        graph,
        cells,
        start: s,
        goal: g,
        outcome,
    })
}

/// `plan` with default configs and a PRM generator seeded from `token`.
pub fn plan_with_defaults(
    kind: PlannerKind,
    start: Point,
    goal: Point,
    ws: &Workspace,
    token: ReplayToken,
) -> Result<Plan, PlanError> {
    let mut rng = token.to_std_rng();
    plan(kind, start, goal, ws, PlannerCfg::default(), &mut rng)
}
