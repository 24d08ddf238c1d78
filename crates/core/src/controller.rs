//! Piece controller - the falling piece and its moves
//!
//! The controller tracks at most one active piece. The piece's cells live in
//! the [`Grid`] like any placed cell; the controller only remembers where they
//! are so it can erase and rewrite them. Every operation takes the grid it
//! acts on explicitly.
//!
//! All moves are check-then-act: a blocked move leaves both the grid and the
//! controller untouched.

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::cells_at;
use crate::error::SpawnError;
use crate::grid::Grid;
use crate::types::{Coord, Direction, PieceKind, Rotation, COLS, ROWS, SPAWN_COL, SPAWN_ROW};

/// Upper bound on kick steps per rotation. No table overhangs the grid by
/// more than two cells, so two steps per axis always reach the fixed point.
const MAX_KICK_STEPS: u8 = 4;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub anchor: Coord,
    pub rotation: Rotation,
}

impl ActivePiece {
    /// A new piece at the spawn anchor in its spawn orientation
    pub fn spawned(kind: PieceKind) -> Self {
        Self {
            kind,
            anchor: Coord::new(SPAWN_ROW, SPAWN_COL),
            rotation: Rotation::North,
        }
    }

    /// Absolute grid cells covered by the piece
    pub fn cells(&self) -> [Coord; 4] {
        cells_at(self.kind, self.rotation, self.anchor)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PieceController {
    active: Option<ActivePiece>,
}

impl PieceController {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn cells(&self) -> Option<[Coord; 4]> {
        self.active.map(|piece| piece.cells())
    }

    /// Place a new piece of `kind` at the spawn anchor.
    ///
    /// Fails without touching the grid if any target cell is occupied; the
    /// controller then holds no active piece.
    pub fn spawn(&mut self, grid: &mut Grid, kind: PieceKind) -> Result<(), SpawnError> {
        let piece = ActivePiece::spawned(kind);
        let cells = piece.cells();

        if let Some(&at) = cells.iter().find(|at| !grid.is_free(**at, &[])) {
            self.active = None;
            return Err(SpawnError::Blocked { kind, at });
        }

        write_cells(grid, &cells, Some(kind));
        self.active = Some(piece);
        debug!(kind = kind.class_name(), "spawned piece");
        Ok(())
    }

    /// Whether every cell can move one step in `direction`
    pub fn can_translate(&self, grid: &Grid, direction: Direction) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let cells = piece.cells();
        fits(grid, &cells.map(|at| at.step(direction)), &cells)
    }

    /// Move one step in `direction`. Returns `false` (no-op) when blocked.
    pub fn translate(&mut self, grid: &mut Grid, direction: Direction) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if !self.can_translate(grid, direction) {
            return false;
        }
        let moved = ActivePiece {
            anchor: piece.anchor.step(direction),
            ..piece
        };
        self.commit(grid, piece, moved);
        true
    }

    /// Rotate 90° clockwise, kicking off walls, floor and ceiling.
    ///
    /// The new orientation is first evaluated at the current anchor. While
    /// any cell is outside the grid the anchor is nudged one row and/or one
    /// column back towards the inside, until it stops moving. The result is
    /// rejected if it is still out of bounds or overlaps a placed cell.
    pub fn rotate(&mut self, grid: &mut Grid) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let rotation = piece.rotation.rotate_cw();
        let anchor = kick_into_bounds(piece.kind, rotation, piece.anchor);
        let rotated = ActivePiece {
            kind: piece.kind,
            anchor,
            rotation,
        };

        if !fits(grid, &rotated.cells(), &piece.cells()) {
            trace!(
                kind = piece.kind.class_name(),
                row = anchor.row,
                col = anchor.col,
                "rotation blocked"
            );
            return false;
        }

        self.commit(grid, piece, rotated);
        true
    }

    /// Drop straight down as far as possible in a single move.
    ///
    /// Returns the number of rows dropped.
    pub fn drop_to_floor(&mut self, grid: &mut Grid) -> u8 {
        let Some(piece) = self.active else {
            return 0;
        };
        let cells = piece.cells();

        let mut dist: i8 = 0;
        while dist < ROWS as i8 {
            let probe = cells.map(|at| at.offset((dist + 1, 0)));
            if !fits(grid, &probe, &cells) {
                break;
            }
            dist += 1;
        }

        if dist > 0 {
            let dropped = ActivePiece {
                anchor: piece.anchor.offset((dist, 0)),
                ..piece
            };
            self.commit(grid, piece, dropped);
        }
        dist as u8
    }

    /// The piece can no longer descend
    pub fn has_landed(&self, grid: &Grid) -> bool {
        !self.can_translate(grid, Direction::Down)
    }

    /// Release the active piece. Its cells stay in the grid as placed cells.
    pub fn lock(&mut self) -> Option<ActivePiece> {
        self.active.take()
    }

    fn commit(&mut self, grid: &mut Grid, from: ActivePiece, to: ActivePiece) {
        write_cells(grid, &from.cells(), None);
        write_cells(grid, &to.cells(), Some(to.kind));
        self.active = Some(to);
    }
}

/// All `cells` are inside the grid and empty, ignoring the piece's own `footprint`.
fn fits(grid: &Grid, cells: &[Coord; 4], footprint: &[Coord; 4]) -> bool {
    cells.iter().all(|&at| grid.is_free(at, footprint))
}

fn write_cells(grid: &mut Grid, cells: &[Coord; 4], value: Option<PieceKind>) {
    for at in cells {
        // Callers only pass cells that passed a bounds check.
        let written = grid.set(at.row, at.col, value);
        debug_assert!(written.is_ok(), "{:?}", written);
    }
}

/// Nudge `anchor` until every cell of the rotated shape is inside the grid,
/// or until no further nudge changes it.
fn kick_into_bounds(kind: PieceKind, rotation: Rotation, anchor: Coord) -> Coord {
    let mut anchor = anchor;
    for _ in 0..MAX_KICK_STEPS {
        let cells = cells_at(kind, rotation, anchor);
        let mut next = anchor;

        if cells.iter().any(|at| at.row < 0) {
            next.row += 1;
        } else if cells.iter().any(|at| at.row >= ROWS as i8) {
            next.row -= 1;
        }
        if cells.iter().any(|at| at.col < 0) {
            next.col += 1;
        } else if cells.iter().any(|at| at.col >= COLS as i8) {
            next.col -= 1;
        }

        if next == anchor {
            break;
        }
        anchor = next;
    }
    anchor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawned(kind: PieceKind) -> (Grid, PieceController) {
        let mut grid = Grid::new();
        let mut controller = PieceController::new();
        controller.spawn(&mut grid, kind).unwrap();
        (grid, controller)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "OutOfBounds")]
    fn write_outside_grid_trips_debug_assert() {
        let mut grid = Grid::new();
        let cells = cells_at(PieceKind::Stick, Rotation::North, Coord::new(0, COLS as i8 - 1));
        write_cells(&mut grid, &cells, Some(PieceKind::Stick));
    }

    #[test]
    fn kick_pulls_vertical_stick_off_the_ceiling() {
        // West table reaches one row above the anchor.
        let anchor = kick_into_bounds(PieceKind::Stick, Rotation::West, Coord::new(0, 4));
        assert_eq!(anchor, Coord::new(1, 4));
    }

    #[test]
    fn kick_pulls_horizontal_stick_off_the_right_wall() {
        let anchor = kick_into_bounds(
            PieceKind::Stick,
            Rotation::North,
            Coord::new(5, COLS as i8 - 1),
        );
        assert_eq!(anchor, Coord::new(5, COLS as i8 - 3));
    }

    #[test]
    fn kick_is_identity_inside_the_grid() {
        let anchor = Coord::new(10, 4);
        assert_eq!(kick_into_bounds(PieceKind::TShape, Rotation::South, anchor), anchor);
    }

    #[test]
    fn spawn_writes_cells_into_grid() {
        let (grid, controller) = spawned(PieceKind::Cube);
        for at in controller.cells().unwrap() {
            assert_eq!(grid.cell_at(at.row, at.col), Ok(Some(PieceKind::Cube)));
        }
        assert_eq!(grid.filled_count(), 4);
    }

    #[test]
    fn lock_keeps_cells_in_grid() {
        let (grid, mut controller) = spawned(PieceKind::Skew);
        let locked = controller.lock().unwrap();
        assert!(controller.active().is_none());
        for at in locked.cells() {
            assert!(grid.is_occupied(at.row, at.col, &[]));
        }
    }
}
