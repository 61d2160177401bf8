//! Turn order and terminal-state machine for one game.

use super::error::HexError;
use super::grid::Grid;
use super::invariants::{HexInvariants, InvariantSet};
use super::position::Move;
use super::rules::{PathFinder, evaluate};
use super::types::{Adjacency, GameStatus, Side};
use tracing::{debug, info, instrument, warn};

/// A single connection game.
///
/// The game exclusively owns its grid. Callers only ever see copies of it
/// through [`Game::board`], so the turn order and status cannot be
/// bypassed. The status is written by one routine, which runs on
/// construction and after every placement and does nothing once the game
/// is over; every query therefore reads an up-to-date, monotonic status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) grid: Grid,
    pub(crate) current_player: Side,
    pub(crate) status: GameStatus,
    pub(crate) finder: PathFinder,
}

impl Game {
    /// Creates a game on an empty `size`×`size` grid with White to move,
    /// using orthogonal adjacency.
    ///
    /// # Errors
    ///
    /// Returns `HexError::InvalidSize` if `size` is not positive.
    #[instrument]
    pub fn new(size: i32) -> Result<Self, HexError> {
        Self::with_adjacency(size, Adjacency::default())
    }

    /// Creates a game with an explicit neighbour rule.
    ///
    /// # Errors
    ///
    /// Returns `HexError::InvalidSize` if `size` is not positive.
    #[instrument]
    pub fn with_adjacency(size: i32, adjacency: Adjacency) -> Result<Self, HexError> {
        let mut game = Self {
            grid: Grid::new(size)?,
            current_player: Side::White,
            status: GameStatus::InProgress,
            finder: PathFinder::new(adjacency),
        };
        game.refresh_status();
        debug!(size, %adjacency, "Game created");
        Ok(game)
    }

    /// Returns the side to move.
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Lists every empty cell in row-major order.
    ///
    /// A game that ended by connection can still have empty cells.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.grid.empty_cells().collect()
    }

    /// Checks if the game has finished.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, `None` while in progress or on a draw.
    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    /// Returns the full game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> i32 {
        self.grid.size()
    }

    /// Returns the neighbour rule used for connectivity.
    pub fn adjacency(&self) -> Adjacency {
        self.finder.adjacency()
    }

    /// Places the current player's piece at `mv`.
    ///
    /// After the piece lands the status is refreshed. The turn passes to
    /// the opponent only if the game is still in progress.
    ///
    /// # Errors
    ///
    /// - `HexError::NullMove` if no move is supplied
    /// - `HexError::OutOfBounds` if the move is off the grid
    /// - `HexError::CellOccupied` if the cell already holds a piece
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self, mv), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, mv: impl Into<Option<Move>>) -> Result<(), HexError> {
        let mv = mv.into().ok_or(HexError::NullMove)?;
        if self.status.is_over() {
            debug!(%mv, status = %self.status, "Move applied after game end");
        }

        self.grid.place(mv.row(), mv.col(), self.current_player)?;
        self.refresh_status();

        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }
        debug!(%mv, next = %self.current_player, status = %self.status, "Move applied");

        if cfg!(debug_assertions)
            && let Err(violations) = HexInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated after move");
            }
        }

        Ok(())
    }

    /// Returns an independent snapshot of the grid.
    pub fn board(&self) -> Grid {
        self.grid.copy()
    }

    /// Returns an independent snapshot of the whole game.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Recomputes the status unless the game is already over.
    fn refresh_status(&mut self) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }
        self.status = evaluate(&self.grid, &self.finder);
        if self.status.is_over() {
            info!(status = %self.status, "Game over");
        }
        self.status
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            GameStatus::InProgress => writeln!(f, "{} to move", self.current_player)?,
            status => writeln!(f, "{status}")?,
        }
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, DrawReason};

    fn play(game: &mut Game, moves: &[(i32, i32)]) {
        for &(row, col) in moves {
            game.apply_move(Move::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new(3).unwrap();
        assert_eq!(game.current_player(), Side::White);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.legal_moves().len(), 9);
        assert_eq!(game.adjacency(), Adjacency::Orthogonal);
    }

    #[test]
    fn test_invalid_size_propagates() {
        assert_eq!(Game::new(0), Err(HexError::InvalidSize { size: 0 }));
        assert_eq!(
            Game::with_adjacency(-2, Adjacency::Hex),
            Err(HexError::InvalidSize { size: -2 })
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(3).unwrap();
        game.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(game.current_player(), Side::Black);
        game.apply_move(Move::new(1, 0)).unwrap();
        assert_eq!(game.current_player(), Side::White);

        let board = game.board();
        assert_eq!(board.get(0, 0), Ok(Cell::Occupied(Side::White)));
        assert_eq!(board.get(1, 0), Ok(Cell::Occupied(Side::Black)));
    }

    #[test]
    fn test_null_move() {
        let mut game = Game::new(3).unwrap();
        assert_eq!(game.apply_move(None), Err(HexError::NullMove));
        assert_eq!(game.current_player(), Side::White);
        assert_eq!(game.legal_moves().len(), 9);
    }

    #[test]
    fn test_rejected_moves_leave_game_unchanged() {
        let mut game = Game::new(3).unwrap();
        game.apply_move(Move::new(1, 1)).unwrap();
        let before = game.copy();

        assert_eq!(
            game.apply_move(Move::new(1, 1)),
            Err(HexError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(
            game.apply_move(Move::new(3, 0)),
            Err(HexError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_winning_move_keeps_player() {
        let mut game = Game::new(3).unwrap();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(game.status(), GameStatus::Won(Side::White));
        assert_eq!(game.current_player(), Side::White);
    }

    #[test]
    fn test_status_never_reverts() {
        let mut game = Game::new(3).unwrap();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(game.is_over());

        // Placement is still validated and performed, the outcome is frozen.
        game.apply_move(Move::new(2, 2)).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Side::White));
        assert_eq!(game.current_player(), Side::White);
        assert_eq!(game.legal_moves().len(), 3);
        assert!(game.apply_move(Move::new(2, 2)).is_err());
    }

    #[test]
    fn test_board_full_draw() {
        let mut game = Game::new(2).unwrap();
        play(&mut game, &[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(game.status(), GameStatus::Draw(DrawReason::BoardFull));
        assert_eq!(game.current_player(), Side::Black);
    }

    #[test]
    fn test_hex_adjacency_changes_outcome() {
        let mut game = Game::with_adjacency(2, Adjacency::Hex).unwrap();
        play(&mut game, &[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(game.winner(), Some(Side::Black));
    }

    #[test]
    fn test_one_by_one_game_ends_on_first_move() {
        let mut game = Game::new(1).unwrap();
        game.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(game.winner(), Some(Side::White));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_display() {
        let mut game = Game::new(2).unwrap();
        assert_eq!(game.to_string(), "White to move\n..\n..\n");
        play(&mut game, &[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(game.to_string(), "White wins\nWW\nB.\n");
    }
}
