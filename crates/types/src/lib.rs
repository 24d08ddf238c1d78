//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small conversions, making
//! them usable in any context (simulation, terminal rendering, snapshot export).
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Columns**: 10 (indexed 0-9, column 0 is the left edge)
//! - **Spawn anchor**: row 0, column 4 (horizontal center, rounded down)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 300 | Gravity tick period |
//!
//! # Examples
//!
//! ```
//! use tetris_grid_types::{Coord, Direction, PieceKind, Rotation, COLS, ROWS};
//!
//! let kind = PieceKind::from_str("t_shape").unwrap();
//! assert_eq!(kind, PieceKind::TShape);
//! assert_eq!(kind.class_name(), "t_shape");
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! let moved = Coord::new(3, 4).step(Direction::Down);
//! assert_eq!(moved, Coord::new(4, 4));
//!
//! assert_eq!(ROWS, 20);
//! assert_eq!(COLS, 10);
//! ```

use serde::Serialize;

/// Grid height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Grid width in cells (10 columns)
pub const COLS: u8 = 10;

/// Spawn anchor row
pub const SPAWN_ROW: i8 = 0;

/// Spawn anchor column: horizontal center, rounded down
pub const SPAWN_COL: i8 = ((COLS - 1) / 2) as i8;

/// Gravity tick period in milliseconds
pub const TICK_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults() {
        assert_eq!(ROWS, 20);
        assert_eq!(COLS, 10);
        assert_eq!(SPAWN_ROW, 0);
        assert_eq!(SPAWN_COL, 4);
        assert_eq!(TICK_MS, 300);
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let mut cells = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn class_names_round_trip_through_from_str() {
        for kind in [
            PieceKind::Cube,
            PieceKind::Stick,
            PieceKind::TShape,
            PieceKind::LShape,
            PieceKind::LShapeMirror,
            PieceKind::Skew,
            PieceKind::SkewMirror,
        ] {
            assert_eq!(PieceKind::from_str(kind.class_name()), Some(kind));
        }
    }
}

/// The seven piece kinds
///
/// Each kind is rendered with a display class of the same name:
/// - **Cube**: 2x2 square
/// - **Stick**: straight bar of four
/// - **TShape**: T-shaped
/// - **LShape** / **LShapeMirror**: L and its mirror image
/// - **Skew** / **SkewMirror**: S-shaped skew and its mirror image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Cube,
    Stick,
    TShape,
    LShape,
    LShapeMirror,
    Skew,
    SkewMirror,
}

impl PieceKind {
    /// Parse piece kind from its class name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("cube"), Some(PieceKind::Cube));
    /// assert_eq!(PieceKind::from_str("SKEW_MIRROR"), Some(PieceKind::SkewMirror));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cube" => Some(PieceKind::Cube),
            "stick" => Some(PieceKind::Stick),
            "t_shape" => Some(PieceKind::TShape),
            "l_shape" => Some(PieceKind::LShape),
            "l_shape_mirror" => Some(PieceKind::LShapeMirror),
            "skew" => Some(PieceKind::Skew),
            "skew_mirror" => Some(PieceKind::SkewMirror),
            _ => None,
        }
    }

    /// Display class name for renderers
    pub fn class_name(&self) -> &'static str {
        match self {
            PieceKind::Cube => "cube",
            PieceKind::Stick => "stick",
            PieceKind::TShape => "t_shape",
            PieceKind::LShape => "l_shape",
            PieceKind::LShapeMirror => "l_shape_mirror",
            PieceKind::Skew => "skew",
            PieceKind::SkewMirror => "skew_mirror",
        }
    }
}

/// Rotation states, advancing clockwise
///
/// - **North**: Spawn orientation (0°)
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°), wrapping West back to North
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_grid_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Table index (0..4)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Translation directions for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` delta of a single step
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A grid position. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Offset by a `(dr, dc)` pair
    pub fn offset(&self, (dr, dc): (i8, i8)) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// One step in `direction`
    pub fn step(&self, direction: Direction) -> Self {
        self.offset(direction.delta())
    }
}

/// Player input after key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the floor and settle it immediately
    HardDrop,
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by the specified piece kind
pub type Cell = Option<PieceKind>;
