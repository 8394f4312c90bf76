//! Headless pixel surface.
//!
//! [`CanvasMount`] hands out a [`Canvas`] of the requested pixel size and
//! keeps a handle to it, so a host (or a test) can inspect exactly what the
//! engine drew. Cells are painted as `block - 1` squares on black with the
//! score as a caption, the same layout a browser canvas would show.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SurfaceError;
use crate::snapshot::FrameSnapshot;
use crate::surface::{DisplaySurface, MountPoint, SurfaceSize};
use crate::types::{PieceColor, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    block: u32,
    pixels: Vec<Rgb>,
    caption: Option<String>,
    frames: u64,
    game_over: bool,
}

impl Canvas {
    pub fn new(size: SurfaceSize) -> Self {
        let len = (size.width_px as usize) * (size.height_px as usize);
        Self {
            width: size.width_px,
            height: size.height_px,
            block: size.block_px(),
            pixels: vec![Rgb::BLACK; len],
            caption: None,
            frames: 0,
            game_over: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Color at the top-left pixel of grid cell (col, row)
    pub fn cell_color(&self, col: u32, row: u32) -> Option<Rgb> {
        self.pixel(col * self.block, row * self.block)
    }

    /// Text line drawn over the board ("Score: N" or "Game Over")
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Number of frames painted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = (py as usize) * (self.width as usize);
            self.pixels[row + x.min(x_end) as usize..row + x_end as usize].fill(color);
        }
    }

    fn fill_block(&mut self, col: u32, row: u32, color: PieceColor) {
        let size = self.block.saturating_sub(1);
        self.fill_rect(col * self.block, row * self.block, size, size, color.rgb());
    }

    fn paint(&mut self, frame: &FrameSnapshot) {
        self.pixels.fill(Rgb::BLACK);

        for (y, row) in frame.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    self.fill_block(x as u32, y as u32, *color);
                }
            }
        }

        if let Some(active) = frame.active {
            for (x, y) in active.visible_cells() {
                self.fill_block(x as u32, y as u32, active.color);
            }
        }

        self.caption = Some(format!("Score: {}", frame.score));
        self.frames += 1;
    }

    fn paint_game_over(&mut self) {
        self.pixels.fill(Rgb::BLACK);
        self.caption = Some("Game Over".to_string());
        self.game_over = true;
        self.frames += 1;
    }
}

type CanvasSlot = Rc<RefCell<Option<Canvas>>>;

/// Mount point that owns at most one [`Canvas`] at a time.
#[derive(Debug, Clone)]
pub struct CanvasMount {
    name: String,
    present: bool,
    slot: CanvasSlot,
}

impl CanvasMount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            present: true,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// A mount point that refuses to attach, as if its container were absent.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            present: false,
            ..Self::new(name)
        }
    }

    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Inspect the attached canvas, if any.
    pub fn with_canvas<R>(&self, f: impl FnOnce(&Canvas) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }
}

impl MountPoint for CanvasMount {
    fn attach(&mut self, size: SurfaceSize) -> Result<Box<dyn DisplaySurface>, SurfaceError> {
        if !self.present {
            return Err(SurfaceError::MountPointMissing(self.name.clone()));
        }
        *self.slot.borrow_mut() = Some(Canvas::new(size));
        Ok(Box::new(CanvasSurface {
            slot: Rc::clone(&self.slot),
        }))
    }
}

struct CanvasSurface {
    slot: CanvasSlot,
}

impl DisplaySurface for CanvasSurface {
    fn draw(&mut self, frame: &FrameSnapshot) {
        if let Some(canvas) = self.slot.borrow_mut().as_mut() {
            if !canvas.game_over {
                canvas.paint(frame);
            }
        }
    }

    fn show_game_over(&mut self, _frame: &FrameSnapshot) {
        if let Some(canvas) = self.slot.borrow_mut().as_mut() {
            canvas.paint_game_over();
        }
    }

    fn release(&mut self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLOCK_SIZE, COLS, ROWS};

    #[test]
    fn board_canvas_is_300_by_600() {
        let canvas = Canvas::new(SurfaceSize::BOARD);
        assert_eq!((canvas.width(), canvas.height()), (300, 600));
        assert_eq!(canvas.pixel(299, 599), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(300, 0), None);
    }

    #[test]
    fn settled_cells_leave_a_one_pixel_gap() {
        let mut frame = FrameSnapshot::default();
        frame.cells[ROWS as usize - 1][COLS as usize - 1] = Some(PieceColor::Purple);
        let mut canvas = Canvas::new(SurfaceSize::BOARD);
        canvas.paint(&frame);

        let x0 = (COLS as u32 - 1) * BLOCK_SIZE;
        let y0 = (ROWS as u32 - 1) * BLOCK_SIZE;
        assert_eq!(canvas.pixel(x0, y0), Some(PieceColor::Purple.rgb()));
        assert_eq!(canvas.pixel(x0 + BLOCK_SIZE - 2, y0), Some(PieceColor::Purple.rgb()));
        assert_eq!(canvas.pixel(x0 + BLOCK_SIZE - 1, y0), Some(Rgb::BLACK));
        assert_eq!(canvas.caption(), Some("Score: 0"));
    }

    #[test]
    fn missing_mount_refuses_to_attach() {
        let mut mount = CanvasMount::missing("game-container");
        let err = mount.attach(SurfaceSize::BOARD).err();
        assert_eq!(
            err,
            Some(SurfaceError::MountPointMissing("game-container".into()))
        );
        assert!(!mount.is_attached());
    }

    #[test]
    fn release_detaches_canvas() {
        let mut mount = CanvasMount::new("game-container");
        let mut surface = mount.attach(SurfaceSize::BOARD).unwrap();
        assert!(mount.is_attached());
        surface.release();
        assert!(!mount.is_attached());
    }
}
