use std::fmt;

use rustc_hash::FxHashSet;

use super::pos::Pos;
use crate::problem::SearchError;

/// Cells must stay this far from both ends of the `i32` range, so that rolling a block off any
/// terrain cell never wraps around.
pub const EDGE_MARGIN: i32 = 2;

/// Upper bound on the dense lookup table (bounding-box area) of a terrain.
pub const MAX_LOOKUP_CELLS: u64 = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainError {
    /// A cell lies within [`EDGE_MARGIN`] of the coordinate range ends.
    NearRangeEnd { cell: Pos },
    /// The terrain (or its bounding box) would need more than `max` lookup cells.
    TooLarge { cells: u64, max: u64 },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::NearRangeEnd { cell } => write!(
                f,
                "terrain cell ({}, {}) is within {EDGE_MARGIN} of the coordinate range ends",
                cell.row, cell.col
            ),
            TerrainError::TooLarge { cells, max } => {
                write!(f, "terrain needs {cells} lookup cells (max {max})")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

impl From<TerrainError> for SearchError {
    fn from(e: TerrainError) -> Self {
        SearchError::InvalidProblem {
            reason: e.to_string(),
        }
    }
}

#[inline]
fn in_range(v: i32) -> bool {
    (i32::MIN + EDGE_MARGIN..=i32::MAX - EDGE_MARGIN).contains(&v)
}

fn check_size(cells: u64) -> Result<(), TerrainError> {
    if cells > MAX_LOOKUP_CELLS {
        return Err(TerrainError::TooLarge {
            cells,
            max: MAX_LOOKUP_CELLS,
        });
    }
    Ok(())
}

/// A finite set of cells the block may rest on.
///
/// Internally we store a dense lookup table over the terrain's bounding box, so membership is
/// O(1) and positions outside the box (including negative ones) are simply off the terrain.
#[derive(Clone, Debug)]
pub struct Terrain {
    min: Pos,
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    len: usize,
}

impl Terrain {
    /// A full `rows × cols` rectangle with its top-left cell at the origin.
    pub fn rect(rows: i32, cols: i32) -> Result<Self, TerrainError> {
        Self::rect_without(rows, cols, &[])
    }

    /// A `rows × cols` rectangle at the origin with `holes` removed.
    pub fn rect_without(rows: i32, cols: i32, holes: &[Pos]) -> Result<Self, TerrainError> {
        if rows <= 0 || cols <= 0 {
            return Self::from_cells(Vec::new());
        }
        check_size(rows as u64 * cols as u64)?;

        let holes: FxHashSet<Pos> = holes.iter().copied().collect();
        let mut cells = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let p = Pos::new(row, col);
                if !holes.contains(&p) {
                    cells.push(p);
                }
            }
        }
        Self::from_cells(cells)
    }

    /// One inclusive column span per entry: `(row, first_col, last_col)`.
    pub fn from_row_spans(spans: &[(i32, i32, i32)]) -> Result<Self, TerrainError> {
        let mut total: u64 = 0;
        for &(_, first, last) in spans {
            if last >= first {
                total = total.saturating_add((i64::from(last) - i64::from(first) + 1) as u64);
            }
        }
        check_size(total)?;

        let mut cells = Vec::new();
        for &(row, first, last) in spans {
            for col in first..=last {
                cells.push(Pos::new(row, col));
            }
        }
        Self::from_cells(cells)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Pos>) -> Result<Self, TerrainError> {
        let mut cells: Vec<Pos> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();

        if let Some(&cell) = cells.iter().find(|p| !in_range(p.row) || !in_range(p.col)) {
            return Err(TerrainError::NearRangeEnd { cell });
        }

        let Some(first) = cells.first() else {
            return Ok(Self {
                min: Pos::ORIGIN,
                rows: 0,
                cols: 0,
                cells: Vec::new(),
                len: 0,
            });
        };

        let (mut min_row, mut max_row) = (first.row, first.row);
        let (mut min_col, mut max_col) = (first.col, first.col);
        for p in &cells {
            min_row = min_row.min(p.row);
            max_row = max_row.max(p.row);
            min_col = min_col.min(p.col);
            max_col = max_col.max(p.col);
        }

        let rows = (i64::from(max_row) - i64::from(min_row) + 1) as u64;
        let cols = (i64::from(max_col) - i64::from(min_col) + 1) as u64;
        check_size(rows.saturating_mul(cols))?;

        let (rows, cols) = (rows as usize, cols as usize);
        let min = Pos::new(min_row, min_col);
        let mut lookup = vec![false; rows * cols];
        for p in &cells {
            let row = (i64::from(p.row) - i64::from(min.row)) as usize;
            let col = (i64::from(p.col) - i64::from(min.col)) as usize;
            lookup[row * cols + col] = true;
        }

        Ok(Self {
            min,
            rows,
            cols,
            cells: lookup,
            len: cells.len(),
        })
    }

    /// Number of cells on the terrain.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, p: Pos) -> bool {
        let row = i64::from(p.row) - i64::from(self.min.row);
        let col = i64::from(p.col) - i64::from(self.min.col);
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }
}
