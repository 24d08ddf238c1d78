//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer and flushes it to the
//! terminal. The renderer only sees snapshots; it never touches the grid or
//! the piece controller.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_grid_core as core;
pub use tetris_grid_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::{changed_runs, encode_full_into, encode_runs_into, Run, TerminalRenderer};
