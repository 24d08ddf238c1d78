//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid simulation: piece shapes, the cell grid,
//! the falling piece and the tick-driven game loop. It has no dependencies on
//! terminals, input devices or I/O.
//!
//! # Module Structure
//!
//! - [`catalog`]: hand-authored rotation tables for the seven piece kinds
//! - [`grid`]: 20x10 cell grid with bounds checks and line clearing
//! - [`controller`]: the active piece: spawn, translate, rotate with kicks, drop
//! - [`game`]: tick timer, lifecycle, and dispatch of ticks and player actions
//! - [`rng`]: uniform random piece choice and scripted sequences
//! - [`snapshot`]: immutable state handed to renderers
//!
//! # Rules
//!
//! - A piece spawns at the top, horizontally centered. If it has no room the
//!   game is over.
//! - Every tick the piece falls one row. When it cannot fall it settles,
//!   completed rows are removed, and the next piece spawns.
//! - Rotation kicks the piece off walls, floor and ceiling, and is refused if
//!   it would overlap a settled cell.
//! - Hard drop settles the piece immediately and restarts the tick period.
//!
//! # Example
//!
//! ```
//! use tetris_grid_core::{GameLoop, GameStatus};
//! use tetris_grid_types::GameAction;
//!
//! let mut game = GameLoop::new(12345);
//! game.start();
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece settled on the floor; a new one is falling.
//! assert!(game.active().is_some());
//! assert_eq!(game.grid().filled_count(), 8);
//! ```

pub mod catalog;
pub mod controller;
pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tetris_grid_types as types;

// Re-export commonly used types for convenience
pub use catalog::{cells_at, offsets_for, PieceShape, ALL_KINDS};
pub use controller::{ActivePiece, PieceController};
pub use error::{GridError, SpawnError};
pub use game::{GameLoop, GameStatus, TickOutcome, TickTimer};
pub use grid::{Grid, GridRows};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use snapshot::GameSnapshot;
