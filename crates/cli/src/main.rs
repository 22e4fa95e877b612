use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use roadmap::planner::{plan, PlannerCfg, PlannerKind};
use roadmap::prm::{PrmCfg, ReplayToken};
use roadmap::visibility::VisibilityCfg;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;
mod scenario;

use provenance::{write_sidecar, Payload};
use report::PlanReport;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Roadmap path planning among convex obstacles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan on a JSON scenario file
    Plan {
        #[arg(long)]
        scenario: PathBuf,
        #[command(flatten)]
        opts: PlanOpts,
    },
    /// Plan on the built-in demo scenario
    Demo {
        #[command(flatten)]
        opts: PlanOpts,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Planner {
    Visibility,
    Cells,
    Prm,
}

impl From<Planner> for PlannerKind {
    fn from(p: Planner) -> Self {
        match p {
            Planner::Visibility => PlannerKind::Visibility,
            Planner::Cells => PlannerKind::CellDecomposition,
            Planner::Prm => PlannerKind::Prm,
        }
    }
}

#[derive(Args, Debug)]
struct PlanOpts {
    #[arg(long, value_enum, default_value_t = Planner::Visibility)]
    planner: Planner,
    /// PRM sampling iterations
    #[arg(long, default_value_t = PrmCfg::default().samples)]
    samples: usize,
    /// PRM neighborhood size (the sample itself included)
    #[arg(long, default_value_t = PrmCfg::default().neighbors)]
    neighbors: usize,
    /// PRM seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Link consecutive vertices of the same obstacle (visibility only)
    #[arg(long)]
    link_obstacle_neighbors: bool,
    /// Result JSON; a `<stem>.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Plan { scenario, opts } => {
            let sc = Scenario::load(&scenario)?;
            run(&sc, &opts, Some(&scenario))
        }
        Action::Demo { opts } => run(&Scenario::demo(), &opts, None),
    }
}

fn run(sc: &Scenario, opts: &PlanOpts, scenario_path: Option<&Path>) -> Result<()> {
    let kind = PlannerKind::from(opts.planner);
    tracing::info!(planner = kind.name(), out = %opts.out.display(), "plan");
    let ws = sc.workspace()?;
    let cfg = PlannerCfg {
        visibility: VisibilityCfg {
            link_obstacle_neighbors: opts.link_obstacle_neighbors,
        },
        prm: PrmCfg {
            samples: opts.samples,
            neighbors: opts.neighbors,
        },
    };
    let mut rng = ReplayToken::new(opts.seed).to_std_rng();
    let result = plan(kind, sc.start(), sc.goal(), &ws, cfg, &mut rng)
        .with_context(|| format!("{} planner failed", kind.name()))?;
    let report = PlanReport::from(&result);
    match report.distance {
        Some(d) => tracing::info!(distance = d, hops = report.route.len(), "path found"),
        None => tracing::warn!("no path found"),
    }

    if let Some(parent) = opts.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(&opts.out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", opts.out.display()))?;

    let mut payload = Payload::new(json!({
        "planner": kind.name(),
        "samples": opts.samples,
        "neighbors": opts.neighbors,
        "seed": opts.seed,
        "link_obstacle_neighbors": opts.link_obstacle_neighbors,
    }));
    if let Some(path) = scenario_path {
        payload = payload.with_scenario(path);
    }
    write_sidecar(&opts.out, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn opts(planner: Planner, out: PathBuf) -> PlanOpts {
        PlanOpts {
            planner,
            samples: 50,
            neighbors: 5,
            seed: 0,
            link_obstacle_neighbors: false,
            out,
        }
    }

    #[test]
    fn demo_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("cells.json");
        run(&Scenario::demo(), &opts(Planner::Cells, out.clone()), None).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["planner"], "cell_decomposition");
        assert_eq!(doc["found"], true);
        assert_eq!(doc["route"][0], json!([1.0, 1.0]));
        assert_eq!(doc["cells"].as_array().map(Vec::len), Some(4));
        assert!(dir.path().join("nested").join("cells.provenance.json").exists());
    }

    #[test]
    fn unreachable_goal_is_reported_not_an_error() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("prm.json");
        let mut o = opts(Planner::Prm, out.clone());
        o.samples = 0;
        run(&Scenario::demo(), &o, None).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["found"], false);
        assert!(doc["distance"].is_null());
        assert_eq!(doc["vertices"], 6);
    }

    #[test]
    fn non_finite_start_fails_with_context() {
        let dir = tempdir().unwrap();
        let mut sc = Scenario::demo();
        sc.start = [f64::NAN, 1.0];
        let err = run(&sc, &opts(Planner::Visibility, dir.path().join("v.json")), None).unwrap_err();
        assert!(format!("{err:#}").contains("visibility planner failed"));
    }

    #[test]
    fn cli_parses_plan_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "plan", "--scenario", "s.json", "--planner", "prm", "--samples", "9", "--out",
            "o.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Plan { scenario, opts } => {
                assert_eq!(scenario, PathBuf::from("s.json"));
                assert!(matches!(opts.planner, Planner::Prm));
                assert_eq!(opts.samples, 9);
                assert_eq!(opts.neighbors, 5);
            }
            Action::Demo { .. } => panic!("expected plan"),
        }
    }
}
