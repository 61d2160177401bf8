//! Terminal-state evaluation.

use super::super::{DrawReason, GameStatus, Grid, Side};
use super::path::PathFinder;
use tracing::instrument;

/// Decides the game status from each side's connectivity.
///
/// Both sides connected at once is a draw. Neither geometry shipped here
/// lets two crossing chains coexist, but the rule is defined rather than
/// left open.
#[instrument]
pub fn resolve(white_connected: bool, black_connected: bool, board_full: bool) -> GameStatus {
    match (white_connected, black_connected) {
        (true, true) => GameStatus::Draw(DrawReason::SimultaneousConnection),
        (true, false) => GameStatus::Won(Side::White),
        (false, true) => GameStatus::Won(Side::Black),
        (false, false) if board_full => GameStatus::Draw(DrawReason::BoardFull),
        (false, false) => GameStatus::InProgress,
    }
}

/// Evaluates a grid from scratch.
///
/// Each side is checked along its own axis, independently of whose turn it is.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid, finder: &PathFinder) -> GameStatus {
    resolve(
        finder.has_connection(grid, Side::White),
        finder.has_connection(grid, Side::Black),
        grid.is_full(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Adjacency;

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve(false, false, false), GameStatus::InProgress);
        assert_eq!(resolve(true, false, false), GameStatus::Won(Side::White));
        assert_eq!(resolve(false, true, true), GameStatus::Won(Side::Black));
        assert_eq!(
            resolve(false, false, true),
            GameStatus::Draw(DrawReason::BoardFull)
        );
    }

    #[test]
    fn test_simultaneous_connection_is_draw() {
        for full in [false, true] {
            let status = resolve(true, true, full);
            assert_eq!(status, GameStatus::Draw(DrawReason::SimultaneousConnection));
            assert_eq!(status.winner(), None);
        }
    }

    #[test]
    fn test_evaluate_empty_grid() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(
            evaluate(&grid, &PathFinder::default()),
            GameStatus::InProgress
        );
    }

    #[test]
    fn test_evaluate_uses_each_sides_axis() {
        // A full White column spans top to bottom, which is Black's axis.
        let mut grid = Grid::new(3).unwrap();
        for row in 0..3 {
            grid.place(row, 1, Side::White).unwrap();
        }
        assert_eq!(
            evaluate(&grid, &PathFinder::default()),
            GameStatus::InProgress
        );

        for row in 0..3 {
            grid.place(row, 0, Side::Black).unwrap();
        }
        assert_eq!(
            evaluate(&grid, &PathFinder::default()),
            GameStatus::Won(Side::Black)
        );
    }

    #[test]
    fn test_evaluate_full_checkerboard_is_draw() {
        let mut grid = Grid::new(2).unwrap();
        grid.place(0, 0, Side::White).unwrap();
        grid.place(1, 1, Side::White).unwrap();
        grid.place(0, 1, Side::Black).unwrap();
        grid.place(1, 0, Side::Black).unwrap();

        assert_eq!(
            evaluate(&grid, &PathFinder::new(Adjacency::Orthogonal)),
            GameStatus::Draw(DrawReason::BoardFull)
        );
        // The hex diagonal joins Black's (0,1) and (1,0).
        assert_eq!(
            evaluate(&grid, &PathFinder::new(Adjacency::Hex)),
            GameStatus::Won(Side::Black)
        );
    }
}
