//! Grid module - owns the cell matrix
//!
//! The grid is a 20x10 matrix where each cell is empty or holds a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates are `(row, col)`: row 0 is the top, column 0 is the left edge.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Cell, Coord, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (ROWS as usize) * (COLS as usize);

/// Row-major 2D view of the grid, as handed to renderers
pub type GridRows = [[Cell; COLS as usize]; ROWS as usize];

/// The playfield - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLS as i8 {
            return None;
        }
        Some((row as usize) * (COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    pub fn cols(&self) -> u8 {
        COLS
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        Self::index(at.row, at.col).is_some()
    }

    /// Read the cell at (row, col)
    pub fn cell_at(&self, row: i8, col: i8) -> Result<Cell, GridError> {
        Self::index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Write the cell at (row, col). Only bounds are validated.
    pub fn set(&mut self, row: i8, col: i8, value: Cell) -> Result<(), GridError> {
        let idx = Self::index(row, col).ok_or(GridError::OutOfBounds { row, col })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// True if the cell is filled and not one of `excluding`.
    ///
    /// `excluding` lets a piece's own footprint not block its own move.
    /// Out-of-bounds cells are not occupied; bounds are checked separately.
    pub fn is_occupied(&self, row: i8, col: i8, excluding: &[Coord]) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx].is_some() && !excluding.contains(&Coord::new(row, col))
            }
            None => false,
        }
    }

    /// True if the cell is in bounds and either empty or part of `excluding`
    pub fn is_free(&self, at: Coord, excluding: &[Coord]) -> bool {
        self.in_bounds(at) && !self.is_occupied(at.row, at.col, excluding)
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, row: usize) -> bool {
        if row >= ROWS as usize {
            return false;
        }
        let start = row * COLS as usize;
        let end = start + COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every completed row and let the rows above settle.
    ///
    /// Surviving rows keep their top-to-bottom order and are packed against
    /// the bottom; the rows exposed at the top become empty. Returns the
    /// removed row indices, bottom to top.
    pub fn clear_completed_lines(&mut self) -> ArrayVec<usize, { ROWS as usize }> {
        let mut cleared = ArrayVec::new();
        let width = COLS as usize;
        let mut write_row = ROWS as usize;

        for read_row in (0..ROWS as usize).rev() {
            if self.is_row_complete(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Row-major copy of the grid for renderers
    pub fn to_rows(&self) -> GridRows {
        let mut out = [[None; COLS as usize]; ROWS as usize];
        self.write_rows(&mut out);
        out
    }

    /// Copy the grid into an existing row-major buffer
    pub fn write_rows(&self, out: &mut GridRows) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(COLS as usize)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Build a grid from a row-major matrix
    pub fn from_rows(rows: &GridRows) -> Self {
        let mut grid = Self::new();
        for (chunk, row) in grid.cells.chunks_exact_mut(COLS as usize).zip(rows.iter()) {
            chunk.copy_from_slice(row);
        }
        grid
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
