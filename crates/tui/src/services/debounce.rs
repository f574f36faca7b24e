//! Debounce timer primitive.
//!
//! Schedules a [`AppMsg::DebounceElapsed`] after a quiet period; scheduling
//! again before the period elapses cancels the pending timer. Used to avoid
//! rescoring the prompt on every keystroke.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::message::AppMsg;

/// Cancellable one-shot timer feeding the message loop.
pub struct Debouncer {
    delay: Duration,
    sender: mpsc::UnboundedSender<AppMsg>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, sender: mpsc::UnboundedSender<AppMsg>) -> Self {
        Self {
            delay,
            sender,
            pending: None,
        }
    }

    /// Schedule the timer, cancelling any pending one.
    pub fn schedule(&mut self) {
        self.cancel();

        let sender = self.sender.clone();
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Debounce quiet period elapsed");
            let _ = sender.send(AppMsg::DebounceElapsed);
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a timer is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
