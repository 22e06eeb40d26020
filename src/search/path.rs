//! Persistent move histories.
//!
//! A [`Path`] is a move sequence plus the state it reaches. Histories are stored as an
//! `Arc`-linked cons list, newest move first, so every extension of a frontier path shares the
//! parent's history instead of copying it. The end state is cached on the path.

use std::fmt;
use std::sync::Arc;

use crate::problem::MoveLike;

struct Step<M> {
    mv: M,
    prev: Option<Arc<Step<M>>>,
}

/// A move sequence from the start state together with the state it reaches.
///
/// Invariant: `end() == moves().fold(start, apply)`.
pub struct Path<S, M> {
    history: Option<Arc<Step<M>>>,
    len: usize,
    end: S,
}

impl<S, M> Path<S, M> {
    /// The zero-length path sitting at `start`.
    pub fn empty(start: S) -> Self {
        Self {
            history: None,
            len: 0,
            end: start,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn end(&self) -> &S {
        &self.end
    }

    /// The last move, if any.
    pub fn last_move(&self) -> Option<&M> {
        self.history.as_deref().map(|step| &step.mv)
    }

    /// Extend by one move whose result has already been computed.
    ///
    /// The new path shares this path's history.
    pub fn extend_to(&self, mv: M, end: S) -> Self {
        Self {
            history: Some(Arc::new(Step {
                mv,
                prev: self.history.clone(),
            })),
            len: self.len + 1,
            end,
        }
    }

    /// Moves newest first, without allocating.
    pub fn iter_rev(&self) -> impl Iterator<Item = &M> + '_ {
        let mut cur = self.history.as_deref();
        std::iter::from_fn(move || {
            let step = cur?;
            cur = step.prev.as_deref();
            Some(&step.mv)
        })
    }

    /// True if both paths store their histories in the same nodes (not just equal moves).
    pub fn shares_history_with(&self, other: &Self) -> bool {
        match (&self.history, &other.history) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<S, M: Clone> Path<S, M> {
    /// Moves in application order.
    pub fn moves(&self) -> Vec<M> {
        let mut out: Vec<M> = Vec::with_capacity(self.len);
        out.extend(self.iter_rev().cloned());
        out.reverse();
        out
    }
}

impl<M> Path<M::State, M>
where
    M: MoveLike + Clone,
{
    /// Apply `mv` to the end state and extend.
    pub fn extend(&self, mv: &M) -> Self {
        let end = mv.apply(&self.end);
        self.extend_to(mv.clone(), end)
    }

    /// All states along the path, `start` first and [`Path::end`] last.
    ///
    /// Recomputed by replaying the moves from `start`.
    pub fn states(&self, start: &M::State) -> Vec<M::State> {
        let mut out: Vec<M::State> = Vec::with_capacity(self.len + 1);
        out.push(start.clone());
        for mv in self.moves() {
            let next = match out.last() {
                Some(prev) => mv.apply(prev),
                None => break,
            };
            out.push(next);
        }
        out
    }
}

impl<S: Clone, M> Clone for Path<S, M> {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            len: self.len,
            end: self.end.clone(),
        }
    }
}

impl<S, M> Drop for Path<S, M> {
    // Unlink uniquely owned nodes iteratively so deep histories do not recurse on drop.
    fn drop(&mut self) {
        let mut cur = self.history.take();
        while let Some(node) = cur {
            match Arc::try_unwrap(node) {
                Ok(mut step) => cur = step.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl<S: fmt::Debug, M: fmt::Debug> fmt::Debug for Path<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut moves: Vec<&M> = self.iter_rev().collect();
        moves.reverse();
        f.debug_struct("Path")
            .field("moves", &moves)
            .field("end", &self.end)
            .finish()
    }
}

impl<S: fmt::Debug, M: fmt::Display> fmt::Display for Path<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut moves: Vec<&M> = self.iter_rev().collect();
        moves.reverse();
        for (i, mv) in moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        write!(f, " --> {:?}", self.end)
    }
}
