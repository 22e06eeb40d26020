//! Path reconstruction and validation.
//!
//! Search results only cache their end state. These helpers re-run a move list from the start
//! state, either to list the visited states or to check that an externally supplied move
//! sequence is a legal solution.

use std::fmt;

use crate::problem::{GoalLike, LegalityLike, MoveLike, Problem};
use crate::search::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The start state itself fails the legality predicate.
    IllegalStart,
    /// Applying move number `step` (0-based) produced an illegal state.
    IllegalState { step: usize },
    /// Every state was legal but the last one is not a goal.
    NotAGoal { len: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::IllegalStart => write!(f, "start state is illegal"),
            ReplayError::IllegalState { step } => {
                write!(f, "move {step} leads to an illegal state")
            }
            ReplayError::NotAGoal { len } => {
                write!(f, "after {len} moves the state is not a goal")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

/// Re-apply `moves` from the problem's start, checking legality after every move.
///
/// Returns every visited state, start first.
pub fn replay<M, L, G>(problem: &Problem<M, L, G>, moves: &[M]) -> Result<Vec<M::State>, ReplayError>
where
    M: MoveLike,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    if !problem.legality.is_legal(&problem.start) {
        return Err(ReplayError::IllegalStart);
    }

    let mut states: Vec<M::State> = Vec::with_capacity(moves.len() + 1);
    let mut cur = problem.start.clone();
    for (step, mv) in moves.iter().enumerate() {
        let next = mv.apply(&cur);
        if !problem.legality.is_legal(&next) {
            return Err(ReplayError::IllegalState { step });
        }
        states.push(cur);
        cur = next;
    }
    states.push(cur);
    Ok(states)
}

/// Like [`replay`], additionally requiring the final state to be a goal.
pub fn verify_solution<M, L, G>(
    problem: &Problem<M, L, G>,
    moves: &[M],
) -> Result<Vec<M::State>, ReplayError>
where
    M: MoveLike,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    let states = replay(problem, moves)?;
    match states.last() {
        Some(end) if problem.goal.is_goal(end) => Ok(states),
        _ => Err(ReplayError::NotAGoal { len: moves.len() }),
    }
}

/// Rebuild a [`Path`] from a move list, checking legality along the way.
pub fn path_from_moves<M, L, G>(
    problem: &Problem<M, L, G>,
    moves: &[M],
) -> Result<Path<M::State, M>, ReplayError>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    let states = replay(problem, moves)?;
    let mut path = Path::empty(problem.start.clone());
    for (mv, to) in moves.iter().zip(states.into_iter().skip(1)) {
        path = path.extend_to(mv.clone(), to);
    }
    Ok(path)
}
