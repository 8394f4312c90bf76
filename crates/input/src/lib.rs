//! Terminal key mapping for the Input Router.
//!
//! Only the four arrow keys reach the puzzle. Everything else (Escape to
//! leave the game, menu digits, quitting) belongs to the surrounding UI, so
//! this crate just classifies keys and leaves routing to the host.

pub mod map;

pub use tour_blocks_types as types;

pub use map::{intent_for_key, is_exit_key, menu_choice, should_quit};
