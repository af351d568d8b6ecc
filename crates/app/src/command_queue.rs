//! Per-session outbound command queue with a drain tracker.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::{Notify, watch};

use holibot_domain::command::OutboundCommand;

/// FIFO queue for outbound hub commands plus an observable "drained"
/// signal.
///
/// The signal flips to false the moment a command is enqueued and back
/// to true only when [`signal_empty_if_idle`](Self::signal_empty_if_idle)
/// observes an empty queue after a dispatch cycle. Session close waits
/// on that signal so no command is lost to teardown.
///
/// The queue is gated: while the session is not connected, or is
/// closing, enqueued commands are dropped silently — there is no point
/// sending to a dead connection.
///
/// Every session owns its own queue; state is never shared across
/// sessions.
pub struct CommandQueue {
    inner: Mutex<VecDeque<OutboundCommand>>,
    accepting: AtomicBool,
    /// Wakes the dispatcher when a command arrives.
    pending: Notify,
    drained: watch::Sender<bool>,
}

impl CommandQueue {
    /// Create an empty queue with a closed gate and a set drain signal
    /// (a run that never enqueues anything can close immediately).
    #[must_use]
    pub fn new() -> Self {
        let (drained, _) = watch::channel(true);
        Self {
            inner: Mutex::new(VecDeque::new()),
            accepting: AtomicBool::new(false),
            pending: Notify::new(),
            drained,
        }
    }

    fn queue(&self) -> MutexGuard<'_, VecDeque<OutboundCommand>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open or close the gate. Closing does not discard commands
    /// already queued.
    pub fn set_accepting(&self, accepting: bool) {
        self.accepting.store(accepting, Ordering::SeqCst);
    }

    /// Append a command and clear the drain signal.
    ///
    /// Dropped silently (debug log only) while the gate is closed.
    pub fn enqueue(&self, command: OutboundCommand) {
        if !self.accepting.load(Ordering::SeqCst) {
            tracing::debug!(%command, "session not accepting, dropping command");
            return;
        }
        self.queue().push_back(command);
        self.drained.send_replace(false);
        self.pending.notify_one();
    }

    /// Next command in FIFO order, waiting for one to arrive.
    ///
    /// Cancel-safe: a command is only removed in the same poll that
    /// returns it.
    pub async fn next(&self) -> OutboundCommand {
        loop {
            if let Some(command) = self.queue().pop_front() {
                return command;
            }
            self.pending.notified().await;
        }
    }

    /// Pop the next command without waiting.
    pub fn try_next(&self) -> Option<OutboundCommand> {
        self.queue().pop_front()
    }

    /// Set the drain signal iff the queue is currently empty.
    ///
    /// The session calls this after each dispatch attempt and on each
    /// inbound message; it is the only place the signal becomes true.
    pub fn signal_empty_if_idle(&self) {
        if self.queue().is_empty() {
            self.drained.send_replace(true);
        }
    }

    /// Suspend until the queue has been observed empty after dispatch.
    ///
    /// Single-shot per observation: re-enqueuing clears the signal and
    /// a new wait begins.
    pub async fn await_drained(&self) {
        let mut rx = self.drained.subscribe();
        // wait_for only errors when the sender is dropped, and the
        // sender lives inside self.
        let _ = rx.wait_for(|drained| *drained).await;
    }

    /// Number of commands still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
