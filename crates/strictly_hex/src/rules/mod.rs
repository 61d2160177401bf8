//! Game rules for the connection game.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from grid storage and from the turn state machine
//! so they can be checked against arbitrary positions.

pub mod outcome;
pub mod path;

pub use outcome::{evaluate, resolve};
pub use path::PathFinder;
