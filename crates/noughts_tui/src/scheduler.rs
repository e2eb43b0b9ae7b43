//! Delayed, cancellable computer moves.

use noughts::ComputerTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Events delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The computer's pause is over; play for this ticket.
    ComputerMove(ComputerTicket),
}

/// Runs at most one pending computer move.
///
/// Cancelling aborts the sleeping task. A ticket that still slips through
/// is rejected by the match controller because its round is gone.
#[derive(Debug)]
pub struct ComputerScheduler {
    delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Creates a scheduler sending on `event_tx` after `delay`.
    pub fn new(delay: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            delay,
            event_tx,
            pending: None,
        }
    }

    /// Schedules a computer move, replacing any pending one.
    #[instrument(skip(self), fields(round = %ticket.round()))]
    pub fn schedule(&mut self, ticket: ComputerTicket) {
        self.cancel();
        let delay = self.delay;
        let tx = self.event_tx.clone();
        debug!(delay_ms = delay.as_millis() as u64, "Computer move scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(AppEvent::ComputerMove(ticket));
        }));
    }

    /// Drops the pending move, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer move");
            handle.abort();
        }
    }

    /// True while a move is scheduled and not yet delivered.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
