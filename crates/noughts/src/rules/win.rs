//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Cell, Side};
use tracing::instrument;

/// Checks if a side has three in a row.
///
/// Lines are scanned in [`Line::ALL`] order and the first completed one is
/// returned, so a board with two finished lines reports the earlier one.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Side, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a)? {
            Cell::Occupied(side) if board.get(b)? == Cell::Occupied(side)
                && board.get(c)? == Cell::Occupied(side) =>
            {
                Some((side, line))
            }
            _ => None,
        }
    })
}
