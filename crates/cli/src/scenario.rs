use anyhow::{Context, Result};
use roadmap::{Boundary, Obstacle, Point, Workspace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON planning problem: endpoints, the four boundary corners (any order),
/// convex obstacles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: [f64; 2],
    pub goal: [f64; 2],
    pub boundary: [[f64; 2]; 4],
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
}

impl Scenario {
    /// Built-in 10×6 workspace with a box and a triangle between start and goal.
    pub fn demo() -> Self {
        Self {
            start: [1.0, 1.0],
            goal: [9.0, 4.0],
            boundary: [[0.0, 0.0], [0.0, 6.0], [10.0, 6.0], [10.0, 0.0]],
            obstacles: vec![
                vec![[3.0, 3.0], [3.0, 4.0], [5.0, 4.0], [5.0, 3.0]],
                vec![[7.0, 2.0], [7.0, 4.0], [8.0, 2.0]],
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn start(&self) -> Point {
        to_point(self.start)
    }

    pub fn goal(&self) -> Point {
        to_point(self.goal)
    }

    /// Validated workspace geometry.
    pub fn workspace(&self) -> Result<Workspace> {
        let boundary = Boundary::new(self.boundary.map(to_point)).context("invalid boundary")?;
        let obstacles = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, verts)| {
                Obstacle::new(verts.iter().copied().map(to_point).collect())
                    .with_context(|| format!("invalid obstacle {i}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Workspace::new(boundary, obstacles))
    }
}

fn to_point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}
