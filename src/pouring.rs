//! Water-pouring puzzle.
//!
//! Glasses with fixed integer capacities start empty. A move empties a glass, fills it from the
//! tap, or pours one glass into another until the source is empty or the target is full. The
//! goal is reached when some glass holds exactly the target amount.

use std::fmt;

use crate::problem::{AllLegal, GoalLike, MoveLike, Problem};

/// Fill level per glass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glasses(pub Vec<u32>);

impl Glasses {
    pub fn empty(n: usize) -> Self {
        Self(vec![0; n])
    }

    #[inline]
    pub fn levels(&self) -> &[u32] {
        &self.0
    }
}

/// A move, carrying the capacities it needs so that applying it is self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PourMove {
    Empty { glass: usize },
    Fill { glass: usize, capacity: u32 },
    Pour { from: usize, to: usize, to_capacity: u32 },
}

impl MoveLike for PourMove {
    type State = Glasses;

    fn apply(&self, s: &Glasses) -> Glasses {
        let mut levels = s.0.clone();
        match *self {
            PourMove::Empty { glass } => levels[glass] = 0,
            PourMove::Fill { glass, capacity } => levels[glass] = capacity,
            PourMove::Pour {
                from,
                to,
                to_capacity,
            } => {
                let amount = levels[from].min(to_capacity.saturating_sub(levels[to]));
                levels[from] -= amount;
                levels[to] += amount;
            }
        }
        Glasses(levels)
    }
}

impl fmt::Display for PourMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PourMove::Empty { glass } => write!(f, "Empty({glass})"),
            PourMove::Fill { glass, .. } => write!(f, "Fill({glass})"),
            PourMove::Pour { from, to, .. } => write!(f, "Pour({from},{to})"),
        }
    }
}

/// Some glass holds exactly this amount.
#[derive(Debug, Clone, Copy)]
pub struct AnyGlassHolds(pub u32);

impl GoalLike<Glasses> for AnyGlassHolds {
    #[inline]
    fn is_goal(&self, s: &Glasses) -> bool {
        s.0.contains(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pouring {
    capacities: Vec<u32>,
}

impl Pouring {
    pub fn new(capacities: Vec<u32>) -> Self {
        Self { capacities }
    }

    pub fn initial_state(&self) -> Glasses {
        Glasses::empty(self.capacities.len())
    }

    /// Every empty, then every fill, then every ordered pour between distinct glasses.
    pub fn moves(&self) -> Vec<PourMove> {
        let n = self.capacities.len();
        let mut out: Vec<PourMove> = Vec::with_capacity(2 * n + n * n.saturating_sub(1));
        out.extend((0..n).map(|glass| PourMove::Empty { glass }));
        out.extend(
            self.capacities
                .iter()
                .enumerate()
                .map(|(glass, &capacity)| PourMove::Fill { glass, capacity }),
        );
        for from in 0..n {
            for (to, &to_capacity) in self.capacities.iter().enumerate() {
                if from != to {
                    out.push(PourMove::Pour {
                        from,
                        to,
                        to_capacity,
                    });
                }
            }
        }
        out
    }

    pub fn problem(&self, name: &'static str, target: u32) -> PouringProblem {
        Problem::new(
            name,
            self.initial_state(),
            self.moves(),
            AllLegal,
            AnyGlassHolds(target),
        )
    }
}

pub type PouringProblem = Problem<PourMove, AllLegal, AnyGlassHolds>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_enumeration_order_is_fixed() {
        let moves = Pouring::new(vec![4, 3]).moves();
        let names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec!["Empty(0)", "Empty(1)", "Fill(0)", "Fill(1)", "Pour(0,1)", "Pour(1,0)"]
        );
    }

    #[test]
    fn pour_stops_when_target_is_full() {
        let pour = PourMove::Pour {
            from: 0,
            to: 1,
            to_capacity: 3,
        };
        assert_eq!(pour.apply(&Glasses(vec![4, 0])), Glasses(vec![1, 3]));
        assert_eq!(pour.apply(&Glasses(vec![2, 0])), Glasses(vec![0, 2]));
        assert_eq!(pour.apply(&Glasses(vec![4, 3])), Glasses(vec![4, 3]));
    }

    #[test]
    fn fill_and_empty_set_levels() {
        let s = Glasses(vec![1, 2]);
        assert_eq!(
            PourMove::Fill {
                glass: 1,
                capacity: 3
            }
            .apply(&s),
            Glasses(vec![1, 3])
        );
        assert_eq!(PourMove::Empty { glass: 0 }.apply(&s), Glasses(vec![0, 2]));
    }

    #[test]
    fn goal_checks_every_glass() {
        assert!(AnyGlassHolds(2).is_goal(&Glasses(vec![4, 2])));
        assert!(!AnyGlassHolds(2).is_goal(&Glasses(vec![4, 3])));
    }
}
