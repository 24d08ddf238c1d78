//! Falling-block grid simulation (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tetris_grid::{core,input,term,types}` and hosts the binary's
//! configuration.

pub mod config;

pub use tetris_grid_core as core;
pub use tetris_grid_input as input;
pub use tetris_grid_term as term;
pub use tetris_grid_types as types;
