//! Strictly Hex - rules engine for a two-player connection game.
//!
//! Players alternately place pieces on an n×n grid. White wins by joining
//! the left and right edges with a chain of its pieces, Black by joining
//! the top and bottom edges.
//!
//! # Architecture
//!
//! - **Move**: value-type coordinate, validated only when applied
//! - **Grid**: owned cell storage with bounds-checked placement
//! - **PathFinder**: edge-to-edge reachability search
//! - **Game**: turn order, move legality and terminal state
//!
//! # Example
//!
//! ```
//! use strictly_hex::{Game, Move, Side};
//!
//! let mut game = Game::new(3)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(Move::new(row, col))?;
//! }
//! assert!(game.is_over());
//! assert_eq!(game.winner(), Some(Side::White));
//! # Ok::<(), strictly_hex::HexError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod grid;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use config::EngineConfig;
pub use error::{ConfigError, HexError};
pub use game::Game;
pub use grid::Grid;
pub use position::{Move, ParseMoveError};
pub use rules::PathFinder;
pub use types::{Adjacency, Axis, Cell, DrawReason, GameStatus, Side};
