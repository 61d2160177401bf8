//! Error types for the rules engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Rejection of a caller request.
///
/// Every variant is a caller-input error. The engine never retries and
/// leaves its state untouched when it returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum HexError {
    /// Grid dimension is not positive.
    #[display("Grid size must be positive, got {size}")]
    InvalidSize {
        /// The rejected dimension.
        size: i32,
    },

    /// Coordinate falls outside `[0, size)`.
    #[display("Position ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Grid dimension.
        size: i32,
    },

    /// Target cell already holds a piece.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Placement was asked to write an empty cell instead of a piece.
    #[display("Only a White or Black piece can be placed")]
    InvalidSide,

    /// No move was supplied.
    #[display("No move supplied")]
    NullMove,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
