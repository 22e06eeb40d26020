//! Problem layer: glue between a puzzle domain and the search engine.
//!
//! A [`Problem`] bundles:
//! - a start state
//! - the fixed move set (each move a pure [`MoveLike::apply`])
//! - a legality predicate via [`LegalityLike`]
//! - a goal predicate via [`GoalLike`]
//! - explicit budgets via [`ResourceLimits`]
//!
//! Moves are total: applying one may produce a state outside the valid world. Legality is checked
//! separately, so illegal results are pruned by the engine rather than prevented by the move.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One atomic, pure state transformation.
pub trait MoveLike {
    type State: Clone + Eq + Hash;

    fn apply(&self, s: &Self::State) -> Self::State;
}

/// Validity check for a state (e.g. "block fully on the terrain").
///
/// Illegal states are dead ends: they never enter a frontier or the explored set.
pub trait LegalityLike<S> {
    fn is_legal(&self, s: &S) -> bool;
}

/// Solution check for a state.
pub trait GoalLike<S> {
    fn is_goal(&self, s: &S) -> bool;
}

impl<S, F> LegalityLike<S> for F
where
    F: Fn(&S) -> bool,
{
    #[inline]
    fn is_legal(&self, s: &S) -> bool {
        self(s)
    }
}

impl<S, F> GoalLike<S> for F
where
    F: Fn(&S) -> bool,
{
    #[inline]
    fn is_goal(&self, s: &S) -> bool {
        self(s)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllLegal;
impl<S> LegalityLike<S> for AllLegal {
    #[inline]
    fn is_legal(&self, _s: &S) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
/// Search budgets used to bound memory/time consumption.
///
/// These are not exact byte limits, but correlate strongly with allocation size:
/// - `max_states`: number of states admitted to the explored set
/// - `max_edges`: number of candidate extensions generated
/// - `max_generations`: number of generations produced (the search depth)
/// - `max_runtime_steps`: generic loop-iteration guard
/// - `max_duration_ms`: optional wall-clock deadline, checked between generations
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_generations: usize,
    pub max_runtime_steps: u64,
    pub max_duration_ms: Option<u64>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 5_000_000,
            max_edges: 100_000_000,
            max_generations: usize::MAX,
            max_runtime_steps: 500_000_000,
            max_duration_ms: None,
        }
    }
}

impl ResourceLimits {
    /// No budgets at all. The search may not terminate on infinite state spaces.
    pub fn unbounded() -> Self {
        Self {
            max_states: usize::MAX,
            max_edges: usize::MAX,
            max_generations: usize::MAX,
            max_runtime_steps: u64::MAX,
            max_duration_ms: None,
        }
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_max_states(mut self, n: usize) -> Self {
        self.max_states = n;
        self
    }

    pub fn with_max_duration_ms(mut self, ms: Option<u64>) -> Self {
        self.max_duration_ms = ms;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
    pub generations: u64,
    pub runtime_steps: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// The problem is internally inconsistent (e.g. illegal start under strict validation).
    InvalidProblem { reason: String },
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
    /// I/O failure (used by file-backed scenarios).
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
    /// A scenario file could not be decoded.
    Parse { path: String, error: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidProblem { reason } => write!(f, "invalid problem: {reason}"),
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(states={}, edges={}, generations={}, runtime_steps={}, elapsed_ms={})",
                counts.states,
                counts.edges,
                counts.generations,
                counts.runtime_steps,
                counts.elapsed_ms
            ),
            SearchError::AllocationFailed {
                stage,
                structure,
                counts,
            } => write!(
                f,
                "allocation failed at {stage} for {structure}; \
                 counts(states={}, edges={}, generations={}, runtime_steps={}, elapsed_ms={})",
                counts.states,
                counts.edges,
                counts.generations,
                counts.runtime_steps,
                counts.elapsed_ms
            ),
            SearchError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
            SearchError::Parse { path, error } => write!(f, "invalid scenario file {path}: {error}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A fully specified search instance.
///
/// The move set is fixed here, independent of any particular state. Per-state legality is
/// checked separately through `legality`.
#[derive(Debug, Clone)]
pub struct Problem<M: MoveLike, L, G> {
    pub name: &'static str,
    pub start: M::State,
    pub moves: Vec<M>,
    pub legality: L,
    pub goal: G,
    pub limits: ResourceLimits,
}

impl<M, L, G> Problem<M, L, G>
where
    M: MoveLike,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    pub fn new(name: &'static str, start: M::State, moves: Vec<M>, legality: L, goal: G) -> Self {
        Self {
            name,
            start,
            moves,
            legality,
            goal,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Strict validation, intended for CLIs/tests before running the search.
    ///
    /// The search itself does not require this: an illegal start simply has no solution.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.legality.is_legal(&self.start) {
            return Err(SearchError::InvalidProblem {
                reason: format!("{}: start state is not legal", self.name),
            });
        }
        if self.limits.max_generations == 0 {
            return Err(SearchError::InvalidProblem {
                reason: format!("{}: max_generations must be >= 1", self.name),
            });
        }
        Ok(())
    }
}
