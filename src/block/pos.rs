use serde::{Deserialize, Serialize};

/// A grid cell. Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by `d` rows, wrapping at the `i32` range.
    ///
    /// Terrain never holds cells within [`super::terrain::EDGE_MARGIN`] of the range ends, so a
    /// wrapped position is always off the terrain.
    #[inline]
    pub fn d_row(self, d: i32) -> Self {
        Pos::new(self.row.wrapping_add(d), self.col)
    }

    /// Shift by `d` columns, wrapping like [`Pos::d_row`].
    #[inline]
    pub fn d_col(self, d: i32) -> Self {
        Pos::new(self.row, self.col.wrapping_add(d))
    }

    /// Component-wise `<=`.
    #[inline]
    pub fn dominated_by(self, other: Pos) -> bool {
        self.row <= other.row && self.col <= other.col
    }
}

impl From<[i32; 2]> for Pos {
    #[inline]
    fn from([row, col]: [i32; 2]) -> Self {
        Pos::new(row, col)
    }
}
