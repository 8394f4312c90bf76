//! Falling-block puzzle engine - pure, single-threaded, testable
//!
//! This crate holds everything with real rules in it: the grid, the shape
//! templates and their rotation, collision, line clearing, scoring and the
//! `Idle -> Running -> GameOver` lifecycle. It draws nothing itself; a host
//! supplies a [`MountPoint`] and the engine renders through the
//! [`DisplaySurface`] it gets back.
//!
//! # Module Structure
//!
//! - [`shape`]: 0/1 shape matrices, the 7 templates, naive clockwise rotation
//! - [`piece`]: the active piece and its centered spawn position
//! - [`grid`]: 10x20 settled cells, collision, locking, row clearing
//! - [`rng`]: uniform template selection
//! - [`session`]: one game's grid, piece, score and drop clock
//! - [`engine`]: the lifecycle state machine around a session and a surface
//! - [`surface`] / [`canvas`]: display seams and a headless pixel surface
//!
//! # Game Rules
//!
//! - A piece spawns at the top, horizontally centered, with a random template
//! - Gravity moves it one row per drop interval (1000ms by default)
//! - Left/right/rotate are refused silently when they would collide
//! - Rotation has no wall kicks
//! - A piece that cannot move down locks; each full row scores 100
//! - A new piece that collides at spawn ends the game
//!
//! # Example
//!
//! ```
//! use tour_blocks_core::{CanvasMount, EngineConfig, EngineState, PuzzleEngine};
//! use tour_blocks_core::types::{Intent, TICK_MS};
//!
//! let mut mount = CanvasMount::new("game-container");
//! let mut engine = PuzzleEngine::new(EngineConfig::default());
//! engine.start(&mut mount).unwrap();
//!
//! engine.handle_input(Intent::MoveLeft);
//! engine.tick(TICK_MS);
//! assert_eq!(engine.state(), EngineState::Running);
//!
//! engine.stop();
//! assert!(!mount.is_attached());
//! ```

pub mod canvas;
pub mod engine;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod surface;

pub use tour_blocks_types as types;

pub use canvas::{Canvas, CanvasMount};
pub use engine::{EngineConfig, EngineState, PuzzleEngine};
pub use error::{StartError, SurfaceError};
pub use grid::{ClearedRows, Grid};
pub use piece::Piece;
pub use rng::PieceSource;
pub use session::{Session, Step};
pub use shape::{Shape, Template, TEMPLATES};
pub use snapshot::{ActiveSnapshot, FrameSnapshot};
pub use surface::{DisplaySurface, MountPoint, SurfaceSize};
