//! Match controller: one game, the score board, the opponent mode, and the
//! identity of the current board for cancelling stale computer moves.

use super::error::InvalidMove;
use super::game::Game;
use super::score::ScoreBoard;
use super::selector;
use super::types::{GameStatus, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Mode {
    /// Two people share the keyboard.
    #[default]
    #[strum(to_string = "vs Human")]
    HumanVsHuman,
    /// The computer answers every human move.
    #[strum(to_string = "vs Computer")]
    HumanVsComputer,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}

/// Identity of one board. Issued anew on every reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("round#{_0}")]
pub struct RoundId(u64);

impl RoundId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Permission for one computer move on the board it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTicket {
    round: RoundId,
}

impl ComputerTicket {
    /// The board this ticket was issued for.
    pub fn round(&self) -> RoundId {
        self.round
    }
}

/// Why a move request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The rules engine refused it.
    #[display("{_0}")]
    Invalid(InvalidMove),
    /// A human tried to play the computer's side.
    #[display("waiting for the computer")]
    ComputerTurn,
    /// The board was reset after the computer move was scheduled, or it is
    /// no longer the computer's turn.
    #[display("stale computer move")]
    Stale,
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReport {
    /// Applied, the round goes on.
    Continue {
        /// Cell played.
        index: usize,
        /// Side to move next.
        next: Side,
    },
    /// Applied and the round ended; the score board already counts it.
    Finished {
        /// Cell played.
        index: usize,
        /// `Won` or `Drawn`.
        status: GameStatus,
    },
    /// Dropped without touching any state.
    Ignored(Rejection),
}

impl MoveReport {
    /// True if a cell was placed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveReport::Ignored(_))
    }
}

/// Owns the single game-state value of a play session.
#[derive(Debug, Clone)]
pub struct Match {
    game: Game,
    scores: ScoreBoard,
    mode: Mode,
    round_id: RoundId,
}

impl Match {
    /// Side the computer plays in [`Mode::HumanVsComputer`].
    pub const COMPUTER: Side = Side::O;

    /// Starts a session in `mode` with zero scores.
    pub fn new(mode: Mode) -> Self {
        Self {
            game: Game::new(),
            scores: ScoreBoard::new(),
            mode,
            round_id: RoundId(0),
        }
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Scores and round counter.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// The opponent mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Identity of the current board.
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// True while the computer is expected to move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::HumanVsComputer
            && !self.game.is_over()
            && self.game.turn() == Self::COMPUTER
    }

    /// Handles a human move request. Invalid requests are dropped silently.
    #[instrument(skip(self), fields(round = %self.round_id))]
    pub fn submit(&mut self, index: usize) -> MoveReport {
        if self.is_computer_turn() {
            debug!(index, "Ignoring human input during computer turn");
            return MoveReport::Ignored(Rejection::ComputerTurn);
        }
        self.apply(index)
    }

    /// Issues a ticket if the computer should move now.
    pub fn computer_due(&self) -> Option<ComputerTicket> {
        self.is_computer_turn().then_some(ComputerTicket {
            round: self.round_id,
        })
    }

    /// Plays the computer's move for `ticket`.
    ///
    /// Tickets from an earlier board are dropped, as are tickets that
    /// arrive when it is no longer the computer's turn.
    #[instrument(skip(self, rng), fields(round = %self.round_id, ticket_round = %ticket.round))]
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        ticket: ComputerTicket,
        rng: &mut R,
    ) -> MoveReport {
        if ticket.round != self.round_id || !self.is_computer_turn() {
            debug!("Dropping stale computer move");
            return MoveReport::Ignored(Rejection::Stale);
        }

        match selector::select_move(self.game.board(), Self::COMPUTER, rng) {
            Some(index) => self.apply(index),
            None => {
                // Unreachable while the round is in progress.
                warn!("Computer found no empty cell");
                MoveReport::Ignored(Rejection::Stale)
            }
        }
    }

    /// New board, X to move, scores kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game = Game::new();
        self.round_id = self.round_id.next();
        info!(round = %self.round_id, "Board reset");
    }

    /// Zero scores, round 1, new board.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.scores.reset();
        self.restart();
    }

    /// Switches between human and computer opponents. Resets the board.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "Opponent mode changed");
        self.restart();
    }

    fn apply(&mut self, index: usize) -> MoveReport {
        let side = self.game.turn();
        match self.game.play(index) {
            Ok(status) if status.is_terminal() => {
                self.scores.record(status);
                info!(index, %side, %status, "Round finished");
                MoveReport::Finished { index, status }
            }
            Ok(_) => MoveReport::Continue {
                index,
                next: self.game.turn(),
            },
            Err(err) => {
                debug!(error = %err, "Move ignored");
                MoveReport::Ignored(Rejection::Invalid(err))
            }
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
