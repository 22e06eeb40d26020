use crate::problem::{GoalLike, LegalityLike, MoveLike, Problem, SearchError};
use crate::search::resources::ResourceTracker;

/// Successors of `s` whose resulting state is legal, in move-set order.
pub fn legal_successors<M, L, G>(
    problem: &Problem<M, L, G>,
    s: &M::State,
    tracker: &mut ResourceTracker,
) -> Result<Vec<(M, M::State)>, SearchError>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    let mut out: Vec<(M, M::State)> = Vec::with_capacity(problem.moves.len());

    for mv in &problem.moves {
        let to = mv.apply(s);
        if !problem.legality.is_legal(&to) {
            continue;
        }
        out.push((mv.clone(), to));
    }

    tracker.bump_edges("movegen", problem.moves.len())?;
    Ok(out)
}

