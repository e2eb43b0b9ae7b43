//! A single round: board, turn, status and history as one value.

use super::error::InvalidMove;
use super::rules;
use super::types::{Board, GameStatus, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe round state.
///
/// `status` is recomputed from the board after every move. The turn only
/// flips while the round is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Side,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a fresh round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns the status as of the last move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Plays `index` for the side to move.
    ///
    /// On rejection the game is unchanged.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        let side = self.turn;
        self.board = rules::apply_move(&self.board, index, side)?;
        self.history.push(index);
        self.status = rules::evaluate(&self.board);

        if !self.status.is_terminal() {
            self.turn = side.opponent();
        }

        debug!(index, status = ?self.status, next = %self.turn, "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidMoveReason;
    use crate::line::Line;

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Side::X);
        game.play(4).unwrap();
        assert_eq!(game.turn(), Side::O);
        game.play(0).unwrap();
        assert_eq!(game.turn(), Side::X);
        assert_eq!(game.history(), &[4, 0]);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.play(4).unwrap();
        let before = game.clone();
        let err = game.play(4).unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::Occupied);
        assert_eq!(game, before);
    }

    #[test]
    fn test_turn_kept_on_win() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.play(index).unwrap();
        }
        let status = game.play(2).unwrap();
        assert_eq!(
            status,
            GameStatus::Won {
                side: Side::X,
                line: Line::Row(0)
            }
        );
        assert_eq!(game.turn(), Side::X);
        assert!(game.is_over());
        assert_eq!(game.play(5).unwrap_err().reason, InvalidMoveReason::GameOver);
    }
}
