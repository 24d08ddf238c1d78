//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]s and the two
//! lifecycle keys (start, quit). The bindings are fixed: arrows move and
//! rotate, space hard-drops.

pub mod map;

pub use tetris_grid_types as types;

pub use map::{handle_key_event, is_start_key, should_quit};
