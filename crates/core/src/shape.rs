//! Shape module - polyomino matrices and the 7 spawn templates
//!
//! A shape is a small rectangular 0/1 matrix. Rotation replaces the matrix
//! wholesale (transpose, then reverse each row), pivoting on the matrix's own
//! top-left corner. There are no wall kicks: a rotation that collides is
//! simply refused by the caller.

use crate::types::{PieceColor, TEMPLATE_COUNT};

/// Largest side of any shape matrix
pub const MAX_SPAN: usize = 4;

/// Rectangular cell matrix, stored inline (no heap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SPAN]; MAX_SPAN],
}

impl Shape {
    /// Build a shape from 0/1 rows; only the top-left `width x height` block is used.
    pub const fn from_bits(width: u8, height: u8, bits: [[u8; MAX_SPAN]; MAX_SPAN]) -> Self {
        let mut rows = [[false; MAX_SPAN]; MAX_SPAN];
        let mut y = 0;
        while y < height as usize {
            let mut x = 0;
            while x < width as usize {
                rows[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height,
            rows,
        }
    }

    /// An all-empty matrix of the given size
    pub fn empty(width: u8, height: u8) -> Self {
        assert!(width as usize <= MAX_SPAN && height as usize <= MAX_SPAN);
        Self {
            width,
            height,
            rows: [[false; MAX_SPAN]; MAX_SPAN],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at column `x`, row `y` is filled
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.rows[y as usize][x as usize]
    }

    /// Set a matrix cell; returns false if outside the matrix
    pub fn set(&mut self, x: u8, y: u8, filled: bool) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.rows[y as usize][x as usize] = filled;
        true
    }

    /// Filled cells as `(x, y)` offsets from the top-left corner, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.rows[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise: row `i` of the result is column `i` read bottom-up.
    pub fn rotated(&self) -> Self {
        let mut out = Self::empty(self.height, self.width);
        for i in 0..self.width as usize {
            for j in 0..self.height as usize {
                out.rows[i][j] = self.rows[self.height as usize - 1 - j][i];
            }
        }
        out
    }
}

/// A spawnable shape and its fixed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    pub shape: Shape,
    pub color: PieceColor,
}

/// The 7 spawn templates, in color order.
pub const TEMPLATES: [Template; TEMPLATE_COUNT] = [
    Template {
        shape: Shape::from_bits(4, 1, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
        color: PieceColor::Cyan,
    },
    Template {
        shape: Shape::from_bits(3, 2, [[1, 1, 1, 0], [1, 0, 0, 0], [0; 4], [0; 4]]),
        color: PieceColor::Blue,
    },
    Template {
        shape: Shape::from_bits(3, 2, [[1, 1, 1, 0], [0, 0, 1, 0], [0; 4], [0; 4]]),
        color: PieceColor::Orange,
    },
    Template {
        shape: Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        color: PieceColor::Yellow,
    },
    Template {
        shape: Shape::from_bits(3, 2, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
        color: PieceColor::Green,
    },
    Template {
        shape: Shape::from_bits(3, 2, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        color: PieceColor::Purple,
    },
    Template {
        shape: Shape::from_bits(3, 2, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
        color: PieceColor::Red,
    },
];
