//! Greedy move selection for the computer player.
//!
//! Three fixed rules, first match wins:
//!
//! 1. take a cell that completes a line for the mover,
//! 2. otherwise take a cell that would complete a line for the opponent,
//! 3. otherwise pick a random empty cell.
//!
//! There is no lookahead, so forks go unnoticed and a careful human can
//! beat it.

use crate::line::Line;
use crate::types::{Board, Cell, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Which rule produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tactic {
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Nothing urgent, any empty cell.
    Random,
}

/// Returns the empty cell of the first line (scan order) holding two of
/// `side`'s marks and one empty cell.
#[instrument(level = "trace")]
pub fn completing_cell(board: &Board, side: Side) -> Option<usize> {
    Line::ALL.into_iter().find_map(|line| {
        let cells = line.cells();
        let mine = cells
            .iter()
            .filter(|&&i| board.get(i) == Some(Cell::Occupied(side)))
            .count();
        if mine != 2 {
            return None;
        }
        cells.into_iter().find(|&i| board.is_empty(i))
    })
}

/// Picks a cell for `side` and reports which rule chose it.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(level = "debug", skip(rng))]
pub fn select_with_tactic<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Option<(usize, Tactic)> {
    let choice = if let Some(index) = completing_cell(board, side) {
        Some((index, Tactic::Win))
    } else if let Some(index) = completing_cell(board, side.opponent()) {
        Some((index, Tactic::Block))
    } else {
        let empty: Vec<usize> = board.empty_cells().collect();
        empty.choose(rng).map(|&index| (index, Tactic::Random))
    };

    match choice {
        Some((index, tactic)) => debug!(index, %tactic, %side, "Move selected"),
        None => debug!(%side, "Board full, no move"),
    }
    choice
}

/// Picks a cell for `side` using the three-rule heuristic.
pub fn select_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<usize> {
    select_with_tactic(board, side, rng).map(|(index, _)| index)
}

/// [`select_move`] with the thread-local generator.
pub fn select_move_thread_rng(board: &Board, side: Side) -> Option<usize> {
    select_move(board, side, &mut rand::rng())
}
