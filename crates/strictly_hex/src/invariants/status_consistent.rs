//! Status consistency invariant: the cached status is never stale.

use super::Invariant;
use crate::Game;
use crate::rules::evaluate;

/// Invariant: an in-progress game's grid evaluates to in progress.
///
/// A finished game keeps the status it ended with, whatever is placed
/// afterwards, so only running games are re-evaluated.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.is_over() || !evaluate(&game.grid, &game.finder).is_over()
    }

    fn description() -> &'static str {
        "In-progress status matches a fresh evaluation of the grid"
    }
}
