//! Shortest-path driver on top of [`Generations`].
//!
//! The goal predicate is checked on every member of a generation before the next generation is
//! produced, so the first goal path found has minimum length. If the start state is already a
//! goal, no move is ever applied.

use std::sync::Arc;

use log::{debug, info};

use crate::problem::{GoalLike, LegalityLike, MoveLike, Problem, ResourceCounts, SearchError};
use crate::search::generations::{Generation, Generations};
use crate::search::path::Path;

/// Outcome of a completed search.
#[derive(Debug, Clone)]
pub struct SearchReport<P> {
    /// A minimum-length goal path, or `None` if the reachable space holds no goal.
    pub path: Option<P>,
    /// Depth of the last generation inspected.
    pub depth_reached: usize,
    pub explored: usize,
    pub counts: ResourceCounts,
}

/// Run the search to completion and report how far it got.
///
/// An illegal start state has no paths at all, so the report carries no path even when the start
/// also satisfies the goal. Use [`Problem::validate`] to turn an illegal start into an error.
pub fn solve<M, L, G>(
    problem: &Problem<M, L, G>,
) -> Result<SearchReport<Path<M::State, M>>, SearchError>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    let mut gens = Generations::new(problem);
    let mut depth_reached = 0;

    while let Some(generation) = gens.next() {
        let generation = generation?;
        depth_reached = generation.depth;

        if let Some(found) = generation
            .paths
            .iter()
            .find(|p| problem.goal.is_goal(p.end()))
        {
            info!(
                "{}: solution of length {} found ({} states explored)",
                problem.name,
                found.len(),
                gens.explored_len()
            );
            return Ok(SearchReport {
                path: Some(found.clone()),
                depth_reached,
                explored: gens.explored_len(),
                counts: gens.counts(),
            });
        }

        debug!(
            "{}: no goal at depth {} ({} paths)",
            problem.name,
            generation.depth,
            generation.len()
        );
    }

    info!("{}: no solution", problem.name);
    Ok(SearchReport {
        path: None,
        depth_reached,
        explored: gens.explored_len(),
        counts: gens.counts(),
    })
}

/// A minimum-length goal path, or `None` if no goal is reachable.
pub fn shortest_path<M, L, G>(
    problem: &Problem<M, L, G>,
) -> Result<Option<Path<M::State, M>>, SearchError>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    solve(problem).map(|report| report.path)
}

/// Every goal-reaching frontier path, in non-decreasing length order.
///
/// Goal states are expanded like any other state, so this keeps producing longer solutions (to
/// other goal states) until the reachable space is exhausted or a budget trips.
pub fn goal_paths<M, L, G>(problem: &Problem<M, L, G>) -> GoalPaths<'_, M, L, G>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    GoalPaths {
        problem,
        generations: Generations::new(problem),
        current: None,
        next_idx: 0,
    }
}

pub struct GoalPaths<'a, M, L, G>
where
    M: MoveLike,
{
    problem: &'a Problem<M, L, G>,
    generations: Generations<'a, M, L, G>,
    current: Option<Arc<[Path<M::State, M>]>>,
    next_idx: usize,
}

impl<'a, M, L, G> Iterator for GoalPaths<'a, M, L, G>
where
    M: MoveLike + Clone,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    type Item = Result<Path<M::State, M>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(paths) = &self.current {
                while let Some(p) = paths.get(self.next_idx) {
                    self.next_idx += 1;
                    if self.problem.goal.is_goal(p.end()) {
                        return Some(Ok(p.clone()));
                    }
                }
            }

            match self.generations.next()? {
                Ok(Generation { paths, .. }) => {
                    self.current = Some(paths);
                    self.next_idx = 0;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{AllLegal, ResourceLimits};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Inc,
        Double,
    }

    impl MoveLike for Op {
        type State = u32;

        fn apply(&self, s: &u32) -> u32 {
            match self {
                Op::Inc => s + 1,
                Op::Double => s * 2,
            }
        }
    }

    fn reach(target: u32) -> Problem<Op, impl Fn(&u32) -> bool, impl Fn(&u32) -> bool> {
        // Cap the space so it stays finite.
        Problem::new(
            "reach",
            1u32,
            vec![Op::Inc, Op::Double],
            move |s: &u32| *s <= 64,
            move |s: &u32| *s == target,
        )
    }

    #[test]
    fn start_that_is_a_goal_returns_empty_path() {
        let report = solve(&reach(1)).unwrap();
        let path = report.path.unwrap();
        assert!(path.is_empty());
        assert_eq!(*path.end(), 1);
        assert_eq!(report.depth_reached, 0);
        assert_eq!(report.counts.edges, 0);
    }

    #[test]
    fn illegal_start_is_not_a_solution_even_if_it_is_a_goal() {
        let mut p = reach(65);
        p.start = 65;
        let report = solve(&p).unwrap();
        assert!(report.path.is_none());
        assert_eq!(report.explored, 0);
        assert_eq!(report.counts.generations, 0);
    }

    #[test]
    fn finds_shortest_sequence() {
        // 1 -> 2 -> 4 -> 5 -> 10 -> 20: five moves, nothing shorter works.
        let path = shortest_path(&reach(20)).unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(*path.end(), 20);
        assert_eq!(
            path.moves(),
            vec![Op::Inc, Op::Double, Op::Inc, Op::Double, Op::Double]
        );
    }

    #[test]
    fn unreachable_goal_reports_no_solution() {
        let report = solve(&reach(65)).unwrap();
        assert!(report.path.is_none());
        assert_eq!(report.explored, 64);
    }

    #[test]
    fn empty_move_set_has_no_solution_unless_start_is_goal() {
        let p = Problem::new("still", 3u32, Vec::<Op>::new(), AllLegal, |s: &u32| *s == 4);
        assert!(shortest_path(&p).unwrap().is_none());

        let p = Problem::new("still", 4u32, Vec::<Op>::new(), AllLegal, |s: &u32| *s == 4);
        assert_eq!(shortest_path(&p).unwrap().map(|p| p.len()), Some(0));
    }

    #[test]
    fn goal_paths_come_in_length_order() {
        let p = Problem::new(
            "evens",
            1u32,
            vec![Op::Inc, Op::Double],
            |s: &u32| *s <= 16,
            |s: &u32| s % 4 == 0,
        );
        let lens: Vec<usize> = goal_paths(&p).map(|r| r.unwrap().len()).collect();
        assert!(!lens.is_empty());
        assert!(lens.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lens[0], shortest_path(&p).unwrap().unwrap().len());
        // 4, 8, 12, 16 are the reachable goals.
        assert_eq!(lens.len(), 4);
    }

    #[test]
    fn budget_errors_surface_from_solve() {
        let p = Problem::new("up", 0u32, vec![Op::Inc], AllLegal, |_: &u32| false)
            .with_limits(ResourceLimits::default().with_max_states(100));
        match solve(&p) {
            Err(SearchError::LimitExceeded { metric, limit, .. }) => {
                assert_eq!(metric, "states");
                assert_eq!(limit, 100);
            }
            other => panic!("expected a state budget error, got {other:?}"),
        }
    }
}
