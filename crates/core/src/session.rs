//! Session module - one game's grid, active piece, score and drop clock
//!
//! A session is created with an empty grid and a freshly spawned piece. It
//! knows nothing about surfaces or lifecycle; [`crate::engine::PuzzleEngine`]
//! decides when a session runs and when it is over.

use log::{debug, warn};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, FrameSnapshot};
use crate::types::{Intent, LINE_CLEAR_SCORE};

/// Outcome of one movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved or rotated
    Moved,
    /// The move collided and nothing changed
    Blocked,
    /// A downward move collided: the piece locked, full rows were cleared
    /// and a new piece was spawned.
    Settled {
        lines_cleared: u8,
        /// The new piece collides at its spawn position
        spawn_blocked: bool,
    },
}

impl Step {
    pub fn is_spawn_blocked(&self) -> bool {
        matches!(
            self,
            Step::Settled {
                spawn_blocked: true,
                ..
            }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: Piece,
    score: u32,
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    source: PieceSource,
}

impl Session {
    /// Empty grid, zero score, first piece spawned.
    pub fn new(drop_interval_ms: u32, mut source: PieceSource) -> Self {
        let active = Piece::spawn(source.draw());
        Self {
            grid: Grid::new(),
            active,
            score: 0,
            drop_timer_ms: 0,
            drop_interval_ms,
            source,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for setting up positions.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Replace the active piece, for setting up positions.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Collision test for `shape` at the active anchor moved by (dx, dy).
    pub fn collides(&self, dx: i8, dy: i8, shape: &Shape) -> bool {
        self.grid
            .collides(shape, self.active.x + dx, self.active.y + dy)
    }

    /// True if the active piece overlaps the walls or settled cells where it stands
    pub fn is_active_blocked(&self) -> bool {
        self.collides(0, 0, &self.active.shape)
    }

    /// Replace the active piece with a new random template at the spawn position.
    /// Returns false if the new piece collides immediately.
    pub fn spawn(&mut self) -> bool {
        self.active = Piece::spawn(self.source.draw());
        !self.is_active_blocked()
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.collides(dx, dy, &self.active.shape) {
            return false;
        }
        self.active = self.active.translated(dx, dy);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// One row down; when blocked, lock, clear full rows and spawn.
    pub fn move_down(&mut self) -> Step {
        if self.try_shift(0, 1) {
            return Step::Moved;
        }

        if !self.lock() {
            warn!(
                "active piece overlaps the grid at ({}, {}), dropped without locking",
                self.active.x, self.active.y
            );
        }
        let lines_cleared = self.clear_lines();
        let spawn_blocked = !self.spawn();
        debug!(
            "piece settled, {} rows cleared, score {}",
            lines_cleared, self.score
        );
        Step::Settled {
            lines_cleared,
            spawn_blocked,
        }
    }

    /// Rotate clockwise in place. A colliding rotation is discarded.
    pub fn rotate(&mut self) -> bool {
        let rotated = self.active.shape.rotated();
        if self.collides(0, 0, &rotated) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Merge the active piece into the grid.
    pub fn lock(&mut self) -> bool {
        self.grid.lock(&self.active)
    }

    /// Remove full rows and add [`LINE_CLEAR_SCORE`] per row.
    pub fn clear_lines(&mut self) -> u8 {
        let cleared = self.grid.clear_full_rows().len() as u8;
        self.score = self
            .score
            .saturating_add(cleared as u32 * LINE_CLEAR_SCORE);
        cleared
    }

    /// Player intent, mapped onto a movement.
    pub fn apply(&mut self, intent: Intent) -> Step {
        let moved = match intent {
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::Rotate => self.rotate(),
            Intent::SoftDrop => return self.move_down(),
        };
        if moved {
            Step::Moved
        } else {
            Step::Blocked
        }
    }

    /// Accumulate elapsed time; once it exceeds the drop interval perform a
    /// forced descent and reset the accumulator to zero.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<Step> {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms {
            return None;
        }
        let step = self.move_down();
        self.drop_timer_ms = 0;
        Some(step)
    }

    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        for (y, row) in out.cells.iter_mut().enumerate() {
            if let Some(cells) = self.grid.row(y) {
                row.copy_from_slice(cells);
            }
        }
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.game_over = false;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut s = FrameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
