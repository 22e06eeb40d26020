//! Block-sliding puzzle.
//!
//! A 1×1×2 block rolls over a terrain of grid cells. The block either stands upright on one
//! cell or lies on two adjacent cells. A roll is legal iff both cells under the block are on the
//! terrain; the puzzle is solved when the block stands upright on the goal cell.

pub mod pos;
pub mod terrain;

use strum::{Display, VariantArray};

use crate::problem::{GoalLike, LegalityLike, MoveLike, Problem};

pub use pos::Pos;
pub use terrain::{Terrain, TerrainError};

/// The two cells covered by the block, with `b1 <= b2` component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    b1: Pos,
    b2: Pos,
}

impl Block {
    /// Panics in debug builds if the cells are not ordered.
    #[inline]
    pub fn new(b1: Pos, b2: Pos) -> Self {
        debug_assert!(b1.dominated_by(b2), "block cells out of order: {b1:?} {b2:?}");
        Self { b1, b2 }
    }

    #[inline]
    pub fn standing(p: Pos) -> Self {
        Self { b1: p, b2: p }
    }

    #[inline]
    pub fn cells(&self) -> (Pos, Pos) {
        (self.b1, self.b2)
    }

    #[inline]
    pub fn is_standing(&self) -> bool {
        self.b1 == self.b2
    }

    /// Lying along a row (both cells share the row, differ in column).
    #[inline]
    fn is_lying_in_row(&self) -> bool {
        !self.is_standing() && self.b1.row == self.b2.row
    }

    // No ordering assert: a wrapped shift may leave the cells unordered, and such a block is
    // off every terrain anyway.
    #[inline]
    fn d_row(self, d1: i32, d2: i32) -> Self {
        Self {
            b1: self.b1.d_row(d1),
            b2: self.b2.d_row(d2),
        }
    }

    #[inline]
    fn d_col(self, d1: i32, d2: i32) -> Self {
        Self {
            b1: self.b1.d_col(d1),
            b2: self.b2.d_col(d2),
        }
    }

    pub fn left(self) -> Self {
        if self.is_standing() {
            self.d_col(-2, -1)
        } else if self.is_lying_in_row() {
            self.d_col(-1, -2)
        } else {
            self.d_col(-1, -1)
        }
    }

    pub fn right(self) -> Self {
        if self.is_standing() {
            self.d_col(1, 2)
        } else if self.is_lying_in_row() {
            self.d_col(2, 1)
        } else {
            self.d_col(1, 1)
        }
    }

    pub fn up(self) -> Self {
        if self.is_standing() {
            self.d_row(-2, -1)
        } else if self.is_lying_in_row() {
            self.d_row(-1, -1)
        } else {
            self.d_row(-1, -2)
        }
    }

    pub fn down(self) -> Self {
        if self.is_standing() {
            self.d_row(1, 2)
        } else if self.is_lying_in_row() {
            self.d_row(1, 1)
        } else {
            self.d_row(2, 1)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl MoveLike for Direction {
    type State = Block;

    #[inline]
    fn apply(&self, b: &Block) -> Block {
        match self {
            Direction::Left => b.left(),
            Direction::Right => b.right(),
            Direction::Up => b.up(),
            Direction::Down => b.down(),
        }
    }
}

/// Both block cells must be on the terrain.
#[derive(Debug, Clone)]
pub struct OnTerrain(pub Terrain);

impl LegalityLike<Block> for OnTerrain {
    #[inline]
    fn is_legal(&self, b: &Block) -> bool {
        self.0.contains(b.b1) && self.0.contains(b.b2)
    }
}

/// The block stands upright on this cell.
#[derive(Debug, Clone, Copy)]
pub struct StandingAt(pub Pos);

impl GoalLike<Block> for StandingAt {
    #[inline]
    fn is_goal(&self, b: &Block) -> bool {
        b.is_standing() && b.b1 == self.0
    }
}

pub type BlockProblem = Problem<Direction, OnTerrain, StandingAt>;

/// The block starts upright on `start`; all four directions are available everywhere.
pub fn block_problem(name: &'static str, terrain: Terrain, start: Pos, goal: Pos) -> BlockProblem {
    Problem::new(
        name,
        Block::standing(start),
        Direction::VARIANTS.to_vec(),
        OnTerrain(terrain),
        StandingAt(goal),
    )
}
