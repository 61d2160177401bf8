//! Terminal turn invariant: the winner keeps the move.

use super::Invariant;
use crate::{Game, GameStatus};

/// Invariant: when a side has won, it is still recorded as the current player.
///
/// The move that finishes a game does not pass the turn, and only the
/// mover's own pieces can complete a connection.
pub struct TerminalTurnInvariant;

impl Invariant<Game> for TerminalTurnInvariant {
    fn holds(game: &Game) -> bool {
        match game.status() {
            GameStatus::Won(side) => game.current_player() == side,
            GameStatus::InProgress | GameStatus::Draw(_) => true,
        }
    }

    fn description() -> &'static str {
        "The winning side keeps the turn"
    }
}
