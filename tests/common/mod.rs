#![allow(dead_code)]

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use generations::problem::{GoalLike, LegalityLike, MoveLike, Problem};

/// Plain queue-based BFS distances, independent of the generation machinery.
pub fn reference_distance<M, L, G>(problem: &Problem<M, L, G>) -> Option<usize>
where
    M: MoveLike,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    if !problem.legality.is_legal(&problem.start) {
        return None;
    }
    let mut dist: FxHashMap<M::State, usize> = FxHashMap::default();
    let mut q: VecDeque<M::State> = VecDeque::new();
    dist.insert(problem.start.clone(), 0);
    q.push_back(problem.start.clone());

    while let Some(s) = q.pop_front() {
        let d = dist[&s];
        if problem.goal.is_goal(&s) {
            return Some(d);
        }
        for mv in &problem.moves {
            let t = mv.apply(&s);
            if !problem.legality.is_legal(&t) || dist.contains_key(&t) {
                continue;
            }
            dist.insert(t.clone(), d + 1);
            q.push_back(t);
        }
    }
    None
}

/// Shortest goal-reaching move sequence among *all* legal sequences of length `<= max_len`,
/// found by exhaustive enumeration (no deduplication at all).
pub fn shortest_by_enumeration<M, L, G>(problem: &Problem<M, L, G>, max_len: usize) -> Option<usize>
where
    M: MoveLike,
    L: LegalityLike<M::State>,
    G: GoalLike<M::State>,
{
    fn go<M, L, G>(
        problem: &Problem<M, L, G>,
        s: &M::State,
        depth: usize,
        max_len: usize,
        best: &mut Option<usize>,
    ) where
        M: MoveLike,
        L: LegalityLike<M::State>,
        G: GoalLike<M::State>,
    {
        if best.is_some_and(|b| b <= depth) {
            return;
        }
        if problem.goal.is_goal(s) {
            *best = Some(depth);
            return;
        }
        if depth == max_len {
            return;
        }
        for mv in &problem.moves {
            let t = mv.apply(s);
            if problem.legality.is_legal(&t) {
                go(problem, &t, depth + 1, max_len, best);
            }
        }
    }

    if !problem.legality.is_legal(&problem.start) {
        return None;
    }
    let mut best = None;
    go(problem, &problem.start, 0, max_len, &mut best);
    best
}

/// A unit step on an unbounded integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridStep {
    pub dr: i32,
    pub dc: i32,
}

pub const GRID_STEPS: [GridStep; 4] = [
    GridStep { dr: 0, dc: -1 },
    GridStep { dr: 0, dc: 1 },
    GridStep { dr: -1, dc: 0 },
    GridStep { dr: 1, dc: 0 },
];

impl MoveLike for GridStep {
    type State = (i32, i32);

    fn apply(&self, s: &(i32, i32)) -> (i32, i32) {
        (s.0 + self.dr, s.1 + self.dc)
    }
}

/// Open cells of an `n × n` grid, row-major.
#[derive(Debug, Clone)]
pub struct OpenCells {
    pub n: i32,
    pub open: Vec<bool>,
}

impl LegalityLike<(i32, i32)> for OpenCells {
    fn is_legal(&self, s: &(i32, i32)) -> bool {
        let (r, c) = *s;
        r >= 0 && c >= 0 && r < self.n && c < self.n && self.open[(r * self.n + c) as usize]
    }
}
