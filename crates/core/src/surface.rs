//! Display Surface and Mount Point seams.
//!
//! The engine never draws pixels or characters itself. At start it asks a
//! [`MountPoint`] for a [`DisplaySurface`] of [`SurfaceSize::BOARD`], owns
//! that surface exclusively until stop, and hands it a [`FrameSnapshot`]
//! every frame.

use crate::error::SurfaceError;
use crate::snapshot::FrameSnapshot;
use crate::types::{BLOCK_SIZE, COLS, ROWS};

/// Requested surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width_px: u32,
    pub height_px: u32,
}

impl SurfaceSize {
    /// `COLS * BLOCK_SIZE` by `ROWS * BLOCK_SIZE` (300x600)
    pub const BOARD: SurfaceSize = SurfaceSize {
        width_px: COLS as u32 * BLOCK_SIZE,
        height_px: ROWS as u32 * BLOCK_SIZE,
    };

    /// Cell edge in pixels when the grid fills this size
    pub fn block_px(&self) -> u32 {
        (self.width_px / COLS as u32).min(self.height_px / ROWS as u32)
    }
}

/// Something the engine draws into between start and stop.
pub trait DisplaySurface {
    /// Draw settled cells, the active piece and the score.
    fn draw(&mut self, frame: &FrameSnapshot);

    /// Final render once the session is over; later frames are not drawn.
    fn show_game_over(&mut self, frame: &FrameSnapshot);

    /// Detach and free whatever the surface allocated.
    fn release(&mut self);
}

/// The place a surface gets attached to.
pub trait MountPoint {
    fn attach(&mut self, size: SurfaceSize) -> Result<Box<dyn DisplaySurface>, SurfaceError>;
}
