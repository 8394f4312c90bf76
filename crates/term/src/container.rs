//! The "game-container" mount point and the terminal Display Surface.
//!
//! The host opens the container when it shows the game panel and closes it
//! when the panel goes away. While attached, the surface owns the
//! container's framebuffer; the host only copies it onto the screen.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::board_view::BoardView;
use crate::core::{DisplaySurface, FrameSnapshot, MountPoint, SurfaceError, SurfaceSize};
use crate::fb::FrameBuffer;

#[derive(Debug)]
struct Slot {
    open: bool,
    width: u16,
    height: u16,
    frame: Option<FrameBuffer>,
}

/// Terminal region a puzzle surface can be attached to.
#[derive(Debug, Clone)]
pub struct GameContainer {
    slot: Rc<RefCell<Slot>>,
    view: BoardView,
}

impl GameContainer {
    pub const ID: &'static str = "game-container";

    /// A closed container with `width x height` characters of room.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                open: false,
                width,
                height,
                frame: None,
            })),
            view: BoardView::default(),
        }
    }

    pub fn open(&self) {
        self.slot.borrow_mut().open = true;
    }

    /// Remove the container; any attached surface loses its framebuffer.
    pub fn close(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.open = false;
        slot.frame = None;
    }

    pub fn is_open(&self) -> bool {
        self.slot.borrow().open
    }

    pub fn is_attached(&self) -> bool {
        self.slot.borrow().frame.is_some()
    }

    pub fn resize(&self, width: u16, height: u16) {
        let mut slot = self.slot.borrow_mut();
        slot.width = width;
        slot.height = height;
    }

    /// Copy the attached surface's frame onto `target` at (x, y).
    /// Returns false when nothing is attached.
    pub fn blit_into(&self, target: &mut FrameBuffer, x: u16, y: u16) -> bool {
        match &self.slot.borrow().frame {
            Some(frame) => {
                target.blit(frame, x, y);
                true
            }
            None => false,
        }
    }

    /// Inspect the attached surface's frame, if any.
    pub fn with_frame<R>(&self, f: impl FnOnce(&FrameBuffer) -> R) -> Option<R> {
        self.slot.borrow().frame.as_ref().map(f)
    }
}

impl MountPoint for GameContainer {
    fn attach(&mut self, _size: SurfaceSize) -> Result<Box<dyn DisplaySurface>, SurfaceError> {
        let mut slot = self.slot.borrow_mut();
        if !slot.open {
            return Err(SurfaceError::MountPointMissing(Self::ID.to_string()));
        }

        // Pixel sizes don't apply here: the board view decides its character size.
        let (w, h) = self.view.size();
        if w > slot.width || h > slot.height {
            return Err(SurfaceError::TooSmall {
                needed_w: w as u32,
                needed_h: h as u32,
                available_w: slot.width as u32,
                available_h: slot.height as u32,
            });
        }

        slot.frame = Some(FrameBuffer::new(w, h));
        debug!("terminal surface attached ({}x{} chars)", w, h);
        Ok(Box::new(TerminalSurface {
            slot: Rc::clone(&self.slot),
            view: self.view,
            frozen: false,
        }))
    }
}

/// Renders frames into the container's framebuffer.
pub struct TerminalSurface {
    slot: Rc<RefCell<Slot>>,
    view: BoardView,
    frozen: bool,
}

impl DisplaySurface for TerminalSurface {
    fn draw(&mut self, frame: &FrameSnapshot) {
        if self.frozen {
            return;
        }
        if let Some(fb) = self.slot.borrow_mut().frame.as_mut() {
            self.view.render_into(frame, fb);
        }
    }

    fn show_game_over(&mut self, _frame: &FrameSnapshot) {
        if let Some(fb) = self.slot.borrow_mut().frame.as_mut() {
            self.view.render_game_over_into(fb);
        }
        self.frozen = true;
    }

    fn release(&mut self) {
        self.slot.borrow_mut().frame = None;
        debug!("terminal surface released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_container_is_missing() {
        let mut container = GameContainer::new(80, 30);
        let err = container.attach(SurfaceSize::BOARD).err();
        assert_eq!(
            err,
            Some(SurfaceError::MountPointMissing("game-container".into()))
        );
    }

    #[test]
    fn small_container_is_refused() {
        let mut container = GameContainer::new(10, 10);
        container.open();
        assert!(matches!(
            container.attach(SurfaceSize::BOARD),
            Err(SurfaceError::TooSmall { needed_w: 22, needed_h: 23, .. })
        ));
        assert!(!container.is_attached());
    }

    #[test]
    fn frozen_surface_ignores_draws() {
        let mut container = GameContainer::new(80, 30);
        container.open();
        let mut surface = container.attach(SurfaceSize::BOARD).unwrap();

        let frame = FrameSnapshot::default();
        surface.show_game_over(&frame);
        surface.draw(&frame);
        let text = container.with_frame(|fb| fb.to_text()).unwrap();
        assert!(text.contains("Game Over"));
        assert!(!text.contains("Score"));
    }
}
