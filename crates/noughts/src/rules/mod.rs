//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here keeps state, so the
//! same board always evaluates the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::error::{InvalidMove, InvalidMoveReason};
use super::types::{Board, Cell, GameStatus, Side};
use tracing::{instrument, trace};

/// Evaluates a board: first completed line in scan order, then draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((side, line)) = check_winner(board) {
        GameStatus::Won { side, line }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Places `side` at `index`, returning the resulting board.
///
/// Fails when the index is outside 0-8, the cell is taken, or the board is
/// already won or drawn. The input board is left untouched either way.
/// Whose turn it is belongs to [`crate::Game`], not to this function.
#[instrument(level = "debug", skip(board))]
pub fn apply_move(board: &Board, index: usize, side: Side) -> Result<Board, InvalidMove> {
    if evaluate(board).is_terminal() {
        return Err(InvalidMove::new(index, InvalidMoveReason::GameOver));
    }

    match board.get(index) {
        None => Err(InvalidMove::new(index, InvalidMoveReason::OutOfRange)),
        Some(Cell::Occupied(_)) => Err(InvalidMove::new(index, InvalidMoveReason::Occupied)),
        Some(Cell::Empty) => {
            let mut next = *board;
            next.set(index, Cell::Occupied(side));
            trace!(index, %side, "Cell set");
            Ok(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    #[test]
    fn test_apply_move_sets_cell_on_copy() {
        let board = Board::new();
        let next = apply_move(&board, 4, Side::X).unwrap();
        assert_eq!(next.get(4), Some(Cell::Occupied(Side::X)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_rejections() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            apply_move(&board, 0, Side::O),
            Err(InvalidMove::new(0, InvalidMoveReason::Occupied))
        );
        assert_eq!(
            apply_move(&board, 9, Side::O),
            Err(InvalidMove::new(9, InvalidMoveReason::OutOfRange))
        );
    }

    #[test]
    fn test_apply_move_after_win_is_game_over() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(
            apply_move(&board, 5, Side::O),
            Err(InvalidMove::new(5, InvalidMoveReason::GameOver))
        );
    }

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_column_win() {
        let board: Board = "O.X|O.X|.XO".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
        let board: Board = "O.X|O.X|OX.".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                side: Side::O,
                line: Line::Column(0)
            }
        );
    }
}
