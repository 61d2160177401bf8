//! Move coordinates.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) coordinate naming a cell to play.
///
/// A move carries no validity guarantee by itself. Bounds and occupancy
/// are checked against a specific grid when the move is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize, new,
)]
#[display("({row},{col})")]
pub struct Move {
    row: i32,
    col: i32,
}

impl Move {
    /// Zero-based row index.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index.
    pub fn col(&self) -> i32 {
        self.col
    }
}

/// Input that could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {input:?} as a move, expected \"row,col\"")]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts `r,c`, `r c` and `(r,c)`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut parts = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let col = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Move::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_value_equality() {
        assert_eq!(Move::new(1, 2), Move::new(1, 2));
        assert_ne!(Move::new(1, 2), Move::new(2, 1));

        let set: HashSet<_> = [Move::new(0, 0), Move::new(0, 0), Move::new(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(3, 7).to_string(), "(3,7)");
        assert_eq!(Move::new(-1, 0).to_string(), "(-1,0)");
    }

    #[test]
    fn test_parse_notations() {
        assert_eq!("1,2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!(" 1 2 ".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!("(4, 0)".parse::<Move>().unwrap(), Move::new(4, 0));
        assert_eq!("-1,3".parse::<Move>().unwrap(), Move::new(-1, 3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "1", "a,b", "1,2,3", "(1,2"] {
            let err = input.parse::<Move>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let mv = Move::new(10, 4);
        assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
    }
}
