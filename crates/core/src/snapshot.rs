//! Copyable frame handed from a session to a Display Surface.

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, PieceColor, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Grid coordinates of the piece's filled cells that lie inside the grid
    pub fn visible_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.shape.cells().filter_map(move |(dx, dy)| {
            let x = self.x + dx;
            let y = self.y + dy;
            let inside = x >= 0 && x < COLS as i8 && y >= 0 && y < ROWS as i8;
            inside.then_some((x as u8, y as u8))
        })
    }
}

/// Everything a Display Surface needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    pub cells: [[Cell; COLS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub game_over: bool,
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; COLS as usize]; ROWS as usize],
            active: None,
            score: 0,
            game_over: false,
        }
    }
}
