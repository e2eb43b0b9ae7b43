//! Move rejection.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum InvalidMoveReason {
    /// Index outside 0-8.
    #[display("index out of range (must be 0-8)")]
    OutOfRange,
    /// The cell is already taken.
    #[display("cell is already occupied")]
    Occupied,
    /// The board is already won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// The only error the rules engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("Invalid move at {index}: {reason}")]
pub struct InvalidMove {
    /// The requested cell index.
    pub index: usize,
    /// Why it was refused.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates a new rejection.
    pub fn new(index: usize, reason: InvalidMoveReason) -> Self {
        Self { index, reason }
    }
}
