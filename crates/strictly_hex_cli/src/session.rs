//! Game loops driving the engine from text input.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_hex::{Game, Move};
use tracing::{debug, info, instrument};

/// Plays moves read line by line until the game ends or input runs out.
///
/// Unreadable or rejected moves are reported and the same side is asked
/// again. `quit` stops early.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(mut game: Game, input: R, out: &mut W) -> Result<Game> {
    write!(out, "{game}")?;
    prompt(&game, out)?;

    for line in input.lines() {
        let line = line.context("Failed to read move")?;
        let line = line.trim();
        if line.is_empty() {
            prompt(&game, out)?;
            continue;
        }
        if line == "quit" {
            info!("Player quit");
            break;
        }

        match line.parse::<Move>() {
            Err(e) => writeln!(out, "{e}")?,
            Ok(mv) => match game.apply_move(mv) {
                Err(e) => {
                    debug!(%mv, error = %e, "Move rejected");
                    writeln!(out, "Rejected {mv}: {e}")?;
                }
                Ok(()) => {
                    write!(out, "{game}")?;
                    if game.is_over() {
                        break;
                    }
                }
            },
        }
        prompt(&game, out)?;
    }

    Ok(game)
}

/// Applies every move in order and prints the final position.
///
/// The first rejected move aborts the replay.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay<W: Write>(mut game: Game, moves: &[Move], out: &mut W) -> Result<Game> {
    for (i, mv) in moves.iter().enumerate() {
        game.apply_move(*mv)
            .with_context(|| format!("Move {} {} rejected", i + 1, mv))?;
    }
    write!(out, "{game}")?;
    Ok(game)
}

fn prompt<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    if !game.is_over() {
        write!(out, "{} > ", game.current_player())?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_hex::Side;

    fn run_play(size: i32, input: &str) -> (Game, String) {
        let mut out = Vec::new();
        let game = play(Game::new(size).unwrap(), Cursor::new(input), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_play_until_win() {
        let (game, output) = run_play(3, "0,0\n1,0\n0,1\n1,1\n0,2\n2,2\n");
        assert_eq!(game.winner(), Some(Side::White));
        assert!(output.contains("White wins\nWWW\nBB.\n...\n"));
        // Input after the winning move is not consumed.
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn test_play_reports_bad_input() {
        let (game, output) = run_play(2, "hello\n5,5\n0,0\n0,0\nquit\n");
        assert!(output.contains("Cannot parse \"hello\" as a move"));
        assert!(output.contains("Rejected (5,5)"));
        assert!(output.contains("Rejected (0,0): Cell (0, 0) is already occupied"));
        assert_eq!(game.current_player(), Side::Black);
        assert_eq!(game.legal_moves().len(), 3);
    }

    #[test]
    fn test_play_stops_at_end_of_input() {
        let (game, output) = run_play(3, "1 1\n\n");
        assert!(!game.is_over());
        assert!(output.ends_with("Black > "));
    }

    #[test]
    fn test_replay() {
        let moves = [Move::new(0, 0), Move::new(0, 1), Move::new(1, 1), Move::new(1, 0)];
        let mut out = Vec::new();
        let game = replay(Game::new(2).unwrap(), &moves, &mut out).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "draw (board full)\nWB\nBW\n");
    }

    #[test]
    fn test_replay_stops_on_rejection() {
        let moves = [Move::new(0, 0), Move::new(0, 0)];
        let err = replay(Game::new(2).unwrap(), &moves, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 (0,0) rejected");
    }
}
