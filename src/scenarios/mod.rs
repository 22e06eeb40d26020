//! Built-in scenarios and file-backed scenario loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::{block_problem, BlockProblem, Pos, Terrain};
use crate::pouring::{Pouring, PouringProblem};
use crate::problem::{
    GoalLike, LegalityLike, MoveLike, Problem, ResourceCounts, ResourceLimits, SearchError,
};
use crate::search::solve;

/// A runnable problem from one of the supported puzzle domains.
#[derive(Debug, Clone)]
pub enum Scenario {
    Block(BlockProblem),
    Pouring(PouringProblem),
}

/// Flat, printable result of running a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub name: &'static str,
    pub solved: bool,
    pub length: Option<usize>,
    pub moves: Vec<String>,
    pub end_state: Option<String>,
    pub depth_reached: usize,
    pub explored: usize,
    pub counts: ResourceCounts,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Block(p) => p.name,
            Scenario::Pouring(p) => p.name,
        }
    }

    pub fn limits(&self) -> ResourceLimits {
        match self {
            Scenario::Block(p) => p.limits,
            Scenario::Pouring(p) => p.limits,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        match self {
            Scenario::Block(p) => p.validate(),
            Scenario::Pouring(p) => p.validate(),
        }
    }

    pub fn run(&self) -> Result<RunSummary, SearchError> {
        match self {
            Scenario::Block(p) => summarize(p),
            Scenario::Pouring(p) => summarize(p),
        }
    }
}

fn summarize<M, L, G>(problem: &Problem<M, L, G>) -> Result<RunSummary, SearchError>
where
    M: MoveLike + Clone + std::fmt::Display,
    M::State: std::fmt::Debug,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    let report = solve(problem)?;
    let path = report.path.as_ref();
    Ok(RunSummary {
        name: problem.name,
        solved: path.is_some(),
        length: path.map(|p| p.len()),
        moves: path
            .map(|p| p.moves().iter().map(|m| m.to_string()).collect())
            .unwrap_or_default(),
        end_state: path.map(|p| format!("{:?}", p.end())),
        depth_reached: report.depth_reached,
        explored: report.explored,
        counts: report.counts,
    })
}

fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_states: 1_000_000,
        max_edges: 25_000_000,
        max_generations: 10_000,
        max_runtime_steps: 50_000_000,
        max_duration_ms: None,
    }
}

/// A 2-wide, 4-row corridor. The block starts upright in the top-left cell and must stand in
/// the bottom-right cell; `Down, Right, Down` is the only way there in three moves.
pub fn block_corridor() -> Scenario {
    Scenario::Block(
        block_problem(
            "block_corridor",
            Terrain::rect(4, 2).expect("corridor terrain is small"),
            Pos::new(0, 0),
            Pos::new(3, 1),
        )
        .with_limits(demo_limits()),
    )
}

/// The classic first level (optimum: seven moves).
pub fn block_level1() -> Scenario {
    let terrain = Terrain::from_row_spans(&[
        (0, 0, 2),
        (1, 0, 5),
        (2, 0, 8),
        (3, 1, 9),
        (4, 5, 9),
        (5, 6, 8),
    ])
    .expect("level terrain is small");
    Scenario::Block(
        block_problem("block_level1", terrain, Pos::new(1, 1), Pos::new(4, 7))
            .with_limits(demo_limits()),
    )
}

/// Glasses of 4 and 3, measure 2 (optimum: four moves).
pub fn pouring_4_3_target_2() -> Scenario {
    Scenario::Pouring(
        Pouring::new(vec![4, 3])
            .problem("pouring_4_3_target_2", 2)
            .with_limits(demo_limits()),
    )
}

/// Glasses of 4, 9 and 19, measure 17.
pub fn pouring_4_9_19_target_17() -> Scenario {
    Scenario::Pouring(
        Pouring::new(vec![4, 9, 19])
            .problem("pouring_4_9_19_target_17", 17)
            .with_limits(demo_limits()),
    )
}

/// Return a scenario by name.
pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "block_corridor" => Some(block_corridor()),
        "block_level1" => Some(block_level1()),
        "pouring_4_3_target_2" => Some(pouring_4_3_target_2()),
        "pouring_4_9_19_target_17" => Some(pouring_4_9_19_target_17()),
        _ => None,
    }
}

/// Names of all built-in scenarios.
pub fn names() -> &'static [&'static str] {
    &[
        "block_corridor",
        "block_level1",
        "pouring_4_3_target_2",
        "pouring_4_9_19_target_17",
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioSpec {
    Pouring {
        capacities: Vec<u32>,
        target: u32,
    },
    Block {
        rows: i32,
        cols: i32,
        #[serde(default)]
        holes: Vec<[i32; 2]>,
        start: [i32; 2],
        goal: [i32; 2],
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioFile {
    pub scenario: ScenarioSpec,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl ScenarioSpec {
    pub fn build(&self, limits: ResourceLimits) -> Result<Scenario, SearchError> {
        match self {
            ScenarioSpec::Pouring { capacities, target } => {
                if capacities.is_empty() {
                    return Err(SearchError::InvalidProblem {
                        reason: "pouring scenario needs at least one glass".to_string(),
                    });
                }
                Ok(Scenario::Pouring(
                    Pouring::new(capacities.clone())
                        .problem("pouring_from_file", *target)
                        .with_limits(limits),
                ))
            }
            ScenarioSpec::Block {
                rows,
                cols,
                holes,
                start,
                goal,
            } => {
                if *rows < 1 || *cols < 1 {
                    return Err(SearchError::InvalidProblem {
                        reason: format!("block terrain must be at least 1x1, got {rows}x{cols}"),
                    });
                }
                let area = *rows as u64 * *cols as u64;
                if area > limits.max_states as u64 {
                    return Err(SearchError::InvalidProblem {
                        reason: format!(
                            "block terrain {rows}x{cols} exceeds max_states={}",
                            limits.max_states
                        ),
                    });
                }
                let holes: Vec<Pos> = holes.iter().copied().map(Pos::from).collect();
                let terrain = Terrain::rect_without(*rows, *cols, &holes)?;
                Ok(Scenario::Block(
                    block_problem(
                        "block_from_file",
                        terrain,
                        Pos::from(*start),
                        Pos::from(*goal),
                    )
                    .with_limits(limits),
                ))
            }
        }
    }
}

/// Decode a JSON scenario file body. `origin` is only used in error messages.
pub fn from_json_str(body: &str, origin: &str) -> Result<Scenario, SearchError> {
    let file: ScenarioFile = serde_json::from_str(body).map_err(|e| SearchError::Parse {
        path: origin.to_string(),
        error: e.to_string(),
    })?;
    file.scenario.build(file.limits)
}

pub fn from_json_file(path: &Path) -> Result<Scenario, SearchError> {
    let body = fs::read_to_string(path).map_err(|e| SearchError::Io {
        stage: "scenario_load",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    from_json_str(&body, &path.display().to_string())
}
