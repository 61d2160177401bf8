//! Core domain types for the connection game.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// One of the two competing sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize, EnumIter,
)]
pub enum Side {
    /// White moves first and connects the left and right edges.
    White,
    /// Black moves second and connects the top and bottom edges.
    Black,
}

impl Side {
    /// Returns the opponent side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the axis this side has to span to win.
    pub fn axis(self) -> Axis {
        match self {
            Side::White => Axis::Horizontal,
            Side::Black => Axis::Vertical,
        }
    }

    /// Board symbol for this side's pieces.
    pub fn symbol(self) -> char {
        match self {
            Side::White => 'W',
            Side::Black => 'B',
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Cell holds a piece of the given side.
    Occupied(Side),
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Board symbol used by the debug rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(side) => side.symbol(),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Occupied(side)
    }
}

/// A pair of opposite board edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
pub enum Axis {
    /// Left column to right column.
    Horizontal,
    /// Top row to bottom row.
    Vertical,
}

/// Neighbour rule used when following a chain of pieces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Adjacency {
    /// Four neighbours: up, down, left, right.
    #[default]
    #[display("orthogonal")]
    Orthogonal,
    /// Six neighbours: the orthogonal four plus the up-right and
    /// down-left diagonals of a rhombus-shaped hex board.
    #[display("hex")]
    Hex,
}

const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const HEX_OFFSETS: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

impl Adjacency {
    /// Returns the (row, column) offsets of a cell's neighbours.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Adjacency::Orthogonal => &ORTHOGONAL_OFFSETS,
            Adjacency::Hex => &HEX_OFFSETS,
        }
    }
}

/// Why a game ended without a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DrawReason {
    /// Every cell is occupied and neither side is connected.
    #[display("board full")]
    BoardFull,
    /// Both sides completed a connection at the same time.
    #[display("simultaneous connection")]
    SimultaneousConnection,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Won(Side),
    /// Game ended in a draw.
    #[display("draw ({_0})")]
    Draw(DrawReason),
}

impl GameStatus {
    /// Checks if the game has finished.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winning side, `None` while in progress or on a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress | GameStatus::Draw(_) => None,
        }
    }
}
