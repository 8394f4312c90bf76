//! The active (falling, controllable) piece.

use crate::shape::{Shape, Template};
use crate::types::{PieceColor, COLS};

/// A shape anchored on the grid by its top-left matrix corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Place a template at the top row, horizontally centered:
    /// `x = COLS/2 - width/2`, `y = 0`.
    pub fn spawn(template: &Template) -> Self {
        Self {
            shape: template.shape,
            color: template.color,
            x: spawn_column(template.shape.width()),
            y: 0,
        }
    }

    /// Grid coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Anchor column that centers a shape of the given width
pub fn spawn_column(width: u8) -> i8 {
    (COLS / 2) as i8 - (width / 2) as i8
}
