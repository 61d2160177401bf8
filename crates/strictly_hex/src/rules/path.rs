//! Edge-to-edge connectivity search.

use super::super::{Adjacency, Axis, Cell, Grid, Side};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// Decides whether a side has an unbroken chain between two opposite edges.
///
/// The finder holds only the neighbour rule; every query is a fresh
/// breadth-first search over the grid it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathFinder {
    adjacency: Adjacency,
}

impl PathFinder {
    /// Creates a finder using the given neighbour rule.
    pub fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }

    /// Returns the neighbour rule.
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Checks if `side` connects the two edges of `axis`.
    ///
    /// The search is seeded with every `side` piece on the starting edge
    /// (column 0 for horizontal, row 0 for vertical) and expands only
    /// through pieces of the same side. It succeeds as soon as a reached
    /// cell lies on the far edge. Runs in O(size²) time and space.
    #[instrument(skip(self, grid), fields(adjacency = %self.adjacency))]
    pub fn connects(&self, grid: &Grid, side: Side, axis: Axis) -> bool {
        let dim = grid.dim();
        let piece = Cell::Occupied(side);
        let last = dim - 1;

        // Map (along, across) edge coordinates onto (row, col).
        let cell_on = |edge: usize, i: usize| match axis {
            Axis::Horizontal => (i, edge),
            Axis::Vertical => (edge, i),
        };
        let reached_far_edge = |(row, col): (usize, usize)| match axis {
            Axis::Horizontal => col == last,
            Axis::Vertical => row == last,
        };

        let mut visited = vec![false; dim * dim];
        let mut frontier = VecDeque::new();

        for i in 0..dim {
            let (row, col) = cell_on(0, i);
            if grid.cell_at(row, col) == piece {
                visited[row * dim + col] = true;
                frontier.push_back((row, col));
            }
        }

        while let Some((row, col)) = frontier.pop_front() {
            if reached_far_edge((row, col)) {
                return true;
            }
            for &(dr, dc) in self.adjacency.offsets() {
                let (Some(nr), Some(nc)) = (
                    row.checked_add_signed(dr as isize),
                    col.checked_add_signed(dc as isize),
                ) else {
                    continue;
                };
                if nr >= dim || nc >= dim {
                    continue;
                }
                let idx = nr * dim + nc;
                if !visited[idx] && grid.cell_at(nr, nc) == piece {
                    visited[idx] = true;
                    frontier.push_back((nr, nc));
                }
            }
        }

        false
    }

    /// Checks if `side` connects the left column to the right column.
    pub fn left_to_right(&self, grid: &Grid, side: Side) -> bool {
        self.connects(grid, side, Axis::Horizontal)
    }

    /// Checks if `side` connects the top row to the bottom row.
    pub fn top_to_bottom(&self, grid: &Grid, side: Side) -> bool {
        self.connects(grid, side, Axis::Vertical)
    }

    /// Checks if `side` connects its own pair of edges.
    pub fn has_connection(&self, grid: &Grid, side: Side) -> bool {
        self.connects(grid, side, side.axis())
    }
}
