//! Error types for grid access and piece spawning.

use thiserror::Error;

use crate::types::{Coord, PieceKind, COLS, ROWS};

/// Grid access outside `[0, ROWS) x [0, COLS)`.
///
/// Callers pre-check bounds, so this signals a broken invariant rather than
/// a gameplay condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {ROWS}x{COLS} grid")]
    OutOfBounds { row: i8, col: i8 },
}

/// A new piece could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// Target cell already occupied: the stack has topped out.
    #[error("cannot spawn {kind:?}: cell ({}, {}) is occupied", .at.row, .at.col)]
    Blocked { kind: PieceKind, at: Coord },
}
