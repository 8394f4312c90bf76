//! Grid module - the settled cells of the playfield
//!
//! A fixed 10x20 matrix stored as a flat row-major array, so it never
//! allocates and never changes size. Cells change only when a piece locks
//! or when full rows are cleared.
//! Coordinates: (x, y) where x is the column 0..9 (left to right) and y is
//! the row 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (COLS as usize) * (ROWS as usize);

/// Row indices removed by one clear pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { ROWS as usize }>;

/// The settled-cell grid - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    pub fn cols(&self) -> u8 {
        COLS
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    /// Cell at (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the grid and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= ROWS as usize {
            return None;
        }
        let start = y * COLS as usize;
        Some(&self.cells[start..start + COLS as usize])
    }

    /// True if any filled cell of `shape` anchored at (x, y) is out of bounds
    /// or lands on a settled cell.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .cells()
            .any(|(dx, dy)| !self.is_valid(x + dx, y + dy))
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// All-or-nothing: returns false and leaves the grid untouched if any
    /// cell is out of bounds or already filled.
    pub fn lock(&mut self, piece: &Piece) -> bool {
        if self.collides(&piece.shape, piece.x, piece.y) {
            return false;
        }
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
        true
    }

    /// Remove every full row, shifting the rows above it down and filling the
    /// top with empty rows. Returns the removed row indices (in pre-clear
    /// coordinates), bottom to top.
    ///
    /// Two-pointer compaction from the bottom: every row is inspected exactly
    /// once in its original position, so a row that moves down into a
    /// cleared slot is never skipped.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = COLS as usize;
        let mut write_y = ROWS as usize;

        for read_y in (0..ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Settled cells with their coordinates
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, crate::types::PieceColor)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|color| {
                (
                    (i % COLS as usize) as i8,
                    (i / COLS as usize) as i8,
                    color,
                )
            })
        })
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
