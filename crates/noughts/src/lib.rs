//! Noughts - tic-tac-toe rules, a greedy computer opponent and round scoring.
//!
//! # Architecture
//!
//! - **Rules**: pure [`apply_move`] and [`evaluate`] over [`Board`] values
//! - **Selector**: [`select_move`], the win / block / random heuristic
//! - **Game**: one round as an explicit value ([`Game`])
//! - **Scores**: wins per side and the round counter ([`ScoreBoard`])
//! - **Match**: the session controller a front end drives ([`Match`])
//!
//! # Example
//!
//! ```
//! use noughts::{evaluate, GameStatus, Line, Match, Mode, MoveReport, Side};
//!
//! let mut session = Match::new(Mode::HumanVsHuman);
//! for index in [0, 4, 1, 7] {
//!     assert!(session.submit(index).is_applied());
//! }
//! let report = session.submit(2);
//! let won = GameStatus::Won { side: Side::X, line: Line::Row(0) };
//! assert_eq!(report, MoveReport::Finished { index: 2, status: won });
//! assert_eq!(evaluate(session.game().board()), won);
//! assert_eq!(session.scores().wins(Side::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod line;
mod position;
pub mod rules;
mod score;
pub mod selector;
mod session;
mod types;

pub use error::{InvalidMove, InvalidMoveReason};
pub use game::Game;
pub use line::Line;
pub use position::Position;
pub use rules::{apply_move, evaluate};
pub use score::ScoreBoard;
pub use selector::{select_move, select_move_thread_rng, Tactic};
pub use session::{ComputerTicket, Match, Mode, MoveReport, Rejection, RoundId};
pub use types::{Board, BoardParseError, Cell, GameStatus, Side};
