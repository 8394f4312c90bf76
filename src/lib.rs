//! Resume tour puzzle (workspace facade crate).
//!
//! Re-exports the member crates as `tour_blocks::{core, input, term, types}`
//! and holds the host pieces around the engine: configuration and the tour
//! shell that routes keys between the game menu and the puzzle.

pub mod config;
pub mod shell;

pub use tour_blocks_core as core;
pub use tour_blocks_input as input;
pub use tour_blocks_term as term;
pub use tour_blocks_types as types;

pub use config::TourConfig;
pub use shell::{KeyOutcome, ShellMode, TerminalLog, TourShell};
