//! Piece catalog - hand-authored rotation tables
//!
//! Every kind has four rotation states, each a set of four `(dr, dc)` offsets
//! from the piece anchor. Rows grow downwards, columns grow to the right.
//!
//! The `North` table of every kind only uses rows 0 and 1 and columns -1..=2,
//! so a piece anchored at the spawn position always lies inside the grid.
//! Other states may reach above or left of the anchor; rotation kicks pull
//! them back inside.

use crate::types::{Coord, PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor, `(dr, dc)`
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// All piece kinds in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::Cube,
    PieceKind::Stick,
    PieceKind::TShape,
    PieceKind::LShape,
    PieceKind::LShapeMirror,
    PieceKind::Skew,
    PieceKind::SkewMirror,
];

/// Rotation tables indexed by [`Rotation::index`]
type RotationTable = [PieceShape; 4];

const CUBE: RotationTable = [
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 0), (1, 1)],
];

const STICK: RotationTable = [
    // N: horizontal through the anchor row
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // E: vertical, one column right of the anchor
    [(-1, 1), (0, 1), (1, 1), (2, 1)],
    // S: horizontal, one row below the anchor
    [(1, -1), (1, 0), (1, 1), (1, 2)],
    // W: vertical through the anchor column
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
];

const T_SHAPE: RotationTable = [
    [(0, 0), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 0)],
    [(1, -1), (1, 0), (1, 1), (2, 0)],
    [(0, 0), (1, -1), (1, 0), (2, 0)],
];

const L_SHAPE: RotationTable = [
    [(0, 1), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, -1), (1, 0), (1, 1), (2, -1)],
    [(0, -1), (0, 0), (1, 0), (2, 0)],
];

const L_SHAPE_MIRROR: RotationTable = [
    [(0, -1), (1, -1), (1, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(1, -1), (1, 0), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (2, -1), (2, 0)],
];

const SKEW: RotationTable = [
    [(0, 0), (0, 1), (1, -1), (1, 0)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, -1), (2, 0)],
    [(0, -1), (1, -1), (1, 0), (2, 0)],
];

const SKEW_MIRROR: RotationTable = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
    [(1, -1), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (1, -1), (1, 0), (2, -1)],
];

/// Get the cell offsets for a piece kind and rotation
pub fn offsets_for(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let table = match kind {
        PieceKind::Cube => &CUBE,
        PieceKind::Stick => &STICK,
        PieceKind::TShape => &T_SHAPE,
        PieceKind::LShape => &L_SHAPE,
        PieceKind::LShapeMirror => &L_SHAPE_MIRROR,
        PieceKind::Skew => &SKEW,
        PieceKind::SkewMirror => &SKEW_MIRROR,
    };
    table[rotation.index()]
}

/// Absolute cells of a piece placed at `anchor`
pub fn cells_at(kind: PieceKind, rotation: Rotation, anchor: Coord) -> [Coord; 4] {
    offsets_for(kind, rotation).map(|offset| anchor.offset(offset))
}
