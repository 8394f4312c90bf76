//! Terminal Display Surface for the puzzle.
//!
//! Renders into a simple framebuffer instead of a widget toolkit, then
//! flushes it to the terminal with crossterm.
//!
//! - [`fb`]: styled character framebuffer
//! - [`board_view`]: frame snapshot → framebuffer (pure)
//! - [`container`]: the `game-container` mount point and its surface
//! - [`renderer`]: diffing terminal writer

pub mod board_view;
pub mod container;
pub mod fb;
pub mod renderer;

pub use tour_blocks_core as core;
pub use tour_blocks_types as types;

pub use board_view::BoardView;
pub use container::{GameContainer, TerminalSurface};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
