//! Alternating turn invariant: sides take turns while the game runs.

use super::Invariant;
use crate::{Game, Side};

/// Invariant: while in progress, White has placed as many pieces as
/// Black (White to move) or exactly one more (Black to move).
///
/// Once the game is over the finishing side keeps the turn, so the
/// counts are no longer constrained.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        if game.is_over() {
            return true;
        }
        let white = game.grid.count(Side::White);
        let black = game.grid.count(Side::Black);
        match game.current_player() {
            Side::White => white == black,
            Side::Black => white == black + 1,
        }
    }

    fn description() -> &'static str {
        "Sides alternate: piece counts match the side to move"
    }
}
