//! Square cell storage for the connection game.

use super::error::HexError;
use super::position::Move;
use super::types::{Cell, Side};
use serde::Serialize;
use tracing::{instrument, trace};

/// An n×n board of cells.
///
/// Cells are stored row-major in one owned vector, so cloning a grid
/// always yields an independent copy. The dimension is fixed at
/// construction and the only mutation is placing a piece on an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns `HexError::InvalidSize` if `size` is not positive.
    #[instrument]
    pub fn new(size: i32) -> Result<Self, HexError> {
        if size <= 0 {
            return Err(HexError::InvalidSize { size });
        }
        let dim = size as usize;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; dim * dim],
        })
    }

    /// Returns the dimension of the grid.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns `HexError::OutOfBounds` if either coordinate is outside `[0, size)`.
    #[instrument(skip(self))]
    pub fn get(&self, row: i32, col: i32) -> Result<Cell, HexError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Places a piece on an empty cell. No other cell is touched.
    ///
    /// # Errors
    ///
    /// - `HexError::OutOfBounds` for coordinates outside the grid
    /// - `HexError::InvalidSide` if `piece` is `Cell::Empty`
    /// - `HexError::CellOccupied` if the cell already holds a piece
    #[instrument(skip(self, piece))]
    pub fn place(&mut self, row: i32, col: i32, piece: impl Into<Cell>) -> Result<(), HexError> {
        let piece = piece.into();
        let idx = self.index(row, col)?;
        if piece.is_empty() {
            return Err(HexError::InvalidSide);
        }
        if !self.cells[idx].is_empty() {
            return Err(HexError::CellOccupied { row, col });
        }
        self.cells[idx] = piece;
        trace!(row, col, piece = ?piece, "Piece placed");
        Ok(())
    }

    /// Returns an independent copy of this grid.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Formats the board for debugging: one line per row, `.` for empty,
    /// `W` for White and `B` for Black.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let dim = self.dim();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(idx, _)| Move::new((idx / dim) as i32, (idx % dim) as i32))
    }

    /// Counts the pieces of one side.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Dimension as an index bound.
    pub(crate) fn dim(&self) -> usize {
        self.size as usize
    }

    /// Unchecked read for callers that already hold in-bounds indices.
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dim() + col]
    }

    fn index(&self, row: i32, col: i32) -> Result<usize, HexError> {
        if !(0..self.size).contains(&row) || !(0..self.size).contains(&col) {
            return Err(HexError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row as usize * self.dim() + col as usize)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.dim()) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
