//! Application state and logic.

use crate::config::{Config, ConfettiConfig};
use crate::confetti::Confetti;
use crate::input::{self, Action};
use crate::scheduler::{AppEvent, ComputerScheduler};
use crossterm::event::KeyCode;
use noughts::{GameStatus, Match, Mode, MoveReport, Position, Side};
use rand::rngs::StdRng;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: Match,
    cursor: Position,
    status_message: String,
    scheduler: ComputerScheduler,
    confetti: Option<Confetti>,
    confetti_config: ConfettiConfig,
    viewport: (u16, u16),
    rng: StdRng,
    should_quit: bool,
}

impl App {
    /// Creates the application. Computer moves come back on `event_tx`.
    pub fn new(config: &Config, event_tx: mpsc::UnboundedSender<AppEvent>, rng: StdRng) -> Self {
        let mode = if *config.vs_computer() {
            Mode::HumanVsComputer
        } else {
            Mode::HumanVsHuman
        };
        let session = Match::new(mode);
        let status_message = turn_message(&session);
        Self {
            session,
            cursor: Position::Center,
            status_message,
            scheduler: ComputerScheduler::new(config.computer().delay(), event_tx),
            confetti: None,
            confetti_config: *config.confetti(),
            viewport: (80, 24),
            rng,
            should_quit: false,
        }
    }

    /// The match being played.
    pub fn session(&self) -> &Match {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The running celebration, if any.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal size, used to size confetti bursts.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = input::action_for(key) {
            self.handle_action(action);
        }
    }

    /// Applies a user action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Restart => {
                self.session.restart();
                self.reset_view();
            }
            Action::NewGame => {
                self.session.new_game();
                self.reset_view();
            }
            Action::ToggleMode => {
                self.session.toggle_mode();
                self.reset_view();
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a click on cell `index`.
    pub fn click(&mut self, index: usize) {
        self.cursor = Position::from_index(index).unwrap_or(self.cursor);
        self.place(index);
    }

    /// Handles an event from a background task.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerMove(ticket) => {
                let report = self.session.play_computer(ticket, &mut self.rng);
                self.after_move(report);
            }
        }
    }

    /// Advances animations; call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(confetti) = &mut self.confetti {
            confetti.tick();
            if !confetti.is_active(now) {
                debug!("Confetti finished");
                self.confetti = None;
            }
        }
    }

    fn place(&mut self, index: usize) {
        let report = self.session.submit(index);
        self.after_move(report);
    }

    fn after_move(&mut self, report: MoveReport) {
        match report {
            MoveReport::Continue { .. } => {
                self.status_message = turn_message(&self.session);
                if let Some(ticket) = self.session.computer_due() {
                    self.scheduler.schedule(ticket);
                }
            }
            MoveReport::Finished { status, .. } => {
                self.status_message = status.to_string();
                if let GameStatus::Won { .. } = status {
                    self.celebrate();
                }
            }
            MoveReport::Ignored(_) => {}
        }
    }

    fn celebrate(&mut self) {
        let (cols, rows) = self.viewport;
        // Braille canvas resolution: 2x4 dots per terminal cell.
        self.confetti = Some(Confetti::burst(
            f64::from(cols) * 2.0,
            f64::from(rows) * 4.0,
            *self.confetti_config.particle_count(),
            self.confetti_config.duration(),
            Instant::now(),
            &mut self.rng,
        ));
    }

    fn reset_view(&mut self) {
        self.scheduler.cancel();
        self.confetti = None;
        self.status_message = turn_message(&self.session);
    }
}

fn turn_message(session: &Match) -> String {
    if session.is_computer_turn() {
        "Computer is thinking...".to_string()
    } else {
        let side = session.game().turn();
        match (session.mode(), side) {
            (Mode::HumanVsComputer, Side::X) => "Your turn (X)".to_string(),
            _ => format!("Player {}'s turn", side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(toml: &str) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let config: Config = toml::from_str(toml).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(&config, tx, StdRng::seed_from_u64(9)), rx)
    }

    const FAST_COMPUTER: &str = "vs_computer = true\n[computer]\nthink_delay_ms = 0\nplace_delay_ms = 1";

    #[tokio::test]
    async fn test_win_shows_message_and_confetti() {
        let (mut app, _rx) = app("");
        for key in ['1', '5', '2', '8', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.status_message(), "Player X wins!");
        assert!(app.confetti().is_some());
        assert_eq!(app.session().scores().wins(Side::X), 1);
    }

    #[tokio::test]
    async fn test_draw_has_no_confetti() {
        let (mut app, _rx) = app("");
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.click(index);
        }
        assert_eq!(app.status_message(), "Game ended in a draw!");
        assert!(app.confetti().is_none());
    }

    #[tokio::test]
    async fn test_invalid_click_is_silent() {
        let (mut app, _rx) = app("");
        app.click(4);
        let message = app.status_message().to_string();
        app.click(4);
        assert_eq!(app.status_message(), message);
        assert_eq!(app.session().game().history(), &[4]);
    }

    #[tokio::test]
    async fn test_computer_replies_after_delay() {
        let (mut app, mut rx) = app(FAST_COMPUTER);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status_message(), "Computer is thinking...");

        let event = rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(app.session().game().board().count(Side::O), 1);
        assert_eq!(app.status_message(), "Your turn (X)");
    }

    #[tokio::test]
    async fn test_restart_cancels_pending_computer_move() {
        let (mut app, mut rx) = app(FAST_COMPUTER);
        app.click(0);
        let stale = rx.recv().await.unwrap();

        app.handle_key(KeyCode::Char('r'));
        app.click(0);
        app.handle_event(stale);

        assert_eq!(app.session().game().board().count(Side::O), 0);
        assert_eq!(app.status_message(), "Computer is thinking...");
    }

    #[tokio::test]
    async fn test_toggle_and_new_game() {
        let (mut app, _rx) = app("");
        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.session().mode(), Mode::HumanVsComputer);
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session().scores().round(), 1);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_confetti_expires() {
        let (mut app, _rx) = app("[confetti]\nduration_ms = 0");
        for index in [0, 4, 1, 7, 2] {
            app.click(index);
        }
        assert!(app.confetti().is_some());
        app.tick(Instant::now());
        assert!(app.confetti().is_none());
    }
}
