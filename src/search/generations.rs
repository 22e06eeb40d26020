//! Lazy, level-synchronous frontier production.
//!
//! [`Generations`] yields generation `k` (every minimum-length path of length `k` that reaches a
//! state nobody reached before) only when asked for it. Generation `k + 1` is built entirely from
//! generation `k` and the explored set as it stood after generation `k`, so the first path to
//! reach any state is a shortest one.
//!
//! Ordering is deterministic: frontier paths are expanded in frontier order and, per path, moves
//! are tried in move-set order. When several candidates reach the same new state within one
//! generation, the first one in that order wins.

use std::sync::Arc;

use log::{debug, info, trace, warn};
use rustc_hash::FxHashSet;

use crate::problem::{GoalLike, LegalityLike, MoveLike, Problem, ResourceCounts, SearchError};
use crate::search::movegen::legal_successors;
use crate::search::path::Path;
use crate::search::resources::ResourceTracker;

/// One frontier: all paths of length `depth` ending in newly explored states.
#[derive(Debug)]
pub struct Generation<S, M> {
    pub depth: usize,
    pub paths: Arc<[Path<S, M>]>,
}

impl<S, M> Clone for Generation<S, M> {
    fn clone(&self) -> Self {
        Self {
            depth: self.depth,
            paths: self.paths.clone(),
        }
    }
}

impl<S, M> Generation<S, M> {
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Iterator over the generations of one breadth-first search.
///
/// The first item is generation 0 (the zero-length path at the start state). Iteration ends
/// after the last non-empty generation, or after the first error. Restarting means building a
/// new iterator; nothing is shared between instances.
pub struct Generations<'a, M, L, G>
where
    M: MoveLike,
{
    problem: &'a Problem<M, L, G>,
    explored: FxHashSet<M::State>,
    frontier: Arc<[Path<M::State, M>]>,
    depth: usize,
    tracker: ResourceTracker,
    phase: Phase,
}

impl<'a, M, L, G> Generations<'a, M, L, G>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    pub fn new(problem: &'a Problem<M, L, G>) -> Self {
        Self {
            problem,
            explored: FxHashSet::default(),
            frontier: Arc::from(Vec::new()),
            depth: 0,
            tracker: ResourceTracker::new(problem.limits),
            phase: Phase::Fresh,
        }
    }

    /// Depth of the most recently yielded generation.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct states reached so far.
    #[inline]
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    #[inline]
    pub fn is_explored(&self, s: &M::State) -> bool {
        self.explored.contains(s)
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.tracker.counts()
    }

    fn first(&mut self) -> Result<Option<Generation<M::State, M>>, SearchError> {
        let start = &self.problem.start;
        if !self.problem.legality.is_legal(start) {
            warn!("{}: start state is illegal; nothing to explore", self.problem.name);
            return Ok(None);
        }

        self.tracker.bump_generations("generation")?;
        self.tracker.bump_states("generation", 1)?;
        self.explored.insert(start.clone());
        self.frontier = Arc::from(vec![Path::empty(start.clone())]);
        self.depth = 0;

        Ok(Some(Generation {
            depth: 0,
            paths: self.frontier.clone(),
        }))
    }

    fn advance(&mut self) -> Result<Option<Generation<M::State, M>>, SearchError> {
        self.tracker.check_deadline("generation")?;

        let mut next: Vec<Path<M::State, M>> = Vec::new();

        for path in self.frontier.iter() {
            self.tracker.bump_steps("generation", 1)?;

            for (mv, to) in legal_successors(self.problem, path.end(), &mut self.tracker)? {
                if self.explored.contains(&to) {
                    trace!("depth {}: dropping already explored candidate", self.depth + 1);
                    continue;
                }

                self.tracker
                    .try_reserve_set("generation", "explored_set", &mut self.explored, 1)?;
                self.tracker.bump_states("generation", 1)?;
                self.explored.insert(to.clone());

                self.tracker
                    .try_reserve_vec("generation", "frontier", &mut next, 1)?;
                next.push(path.extend_to(mv, to));
            }
        }

        if next.is_empty() {
            info!(
                "{}: reachable space exhausted after depth {} ({} states)",
                self.problem.name,
                self.depth,
                self.explored.len()
            );
            return Ok(None);
        }

        self.tracker.bump_generations("generation")?;
        self.depth += 1;
        self.frontier = Arc::from(next);

        debug!(
            "{}: depth {} frontier={} explored={}",
            self.problem.name,
            self.depth,
            self.frontier.len(),
            self.explored.len()
        );

        Ok(Some(Generation {
            depth: self.depth,
            paths: self.frontier.clone(),
        }))
    }
}

impl<'a, M, L, G> Iterator for Generations<'a, M, L, G>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    type Item = Result<Generation<M::State, M>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                self.phase = Phase::Running;
                self.first()
            }
            Phase::Running => self.advance(),
        };

        match step {
            Ok(Some(generation)) => Some(Ok(generation)),
            Ok(None) => {
                self.phase = Phase::Done;
                None
            }
            Err(e) => {
                self.phase = Phase::Done;
                Some(Err(e))
            }
        }
    }
}
