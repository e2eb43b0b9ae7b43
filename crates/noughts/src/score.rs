//! Scores across rounds.

use super::types::{GameStatus, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per side and the current round number.
///
/// The round only advances on a decisive result; a draw leaves both the
/// scores and the round alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
    round: u32,
}

impl ScoreBoard {
    /// Zero scores, round 1.
    pub fn new() -> Self {
        Self { x: 0, o: 0, round: 1 }
    }

    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x,
            Side::O => self.o,
        }
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Records a finished round.
    #[instrument(level = "debug", skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        if let GameStatus::Won { side, .. } = status {
            match side {
                Side::X => self.x += 1,
                Side::O => self.o += 1,
            }
            self.round += 1;
            info!(x = self.x, o = self.o, round = self.round, "Score updated");
        }
    }

    /// Clears everything back to the starting values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    #[test]
    fn test_win_advances_round() {
        let mut scores = ScoreBoard::new();
        scores.record(GameStatus::Won {
            side: Side::O,
            line: Line::Column(1),
        });
        assert_eq!(scores.wins(Side::O), 1);
        assert_eq!(scores.wins(Side::X), 0);
        assert_eq!(scores.round(), 2);
    }

    #[test]
    fn test_draw_changes_nothing() {
        let mut scores = ScoreBoard::new();
        scores.record(GameStatus::Drawn);
        scores.record(GameStatus::InProgress);
        assert_eq!(scores, ScoreBoard::new());
    }
}
