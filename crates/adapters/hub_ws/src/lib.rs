//! # holibot-adapter-hub-ws
//!
//! Websocket hub session — owns the persistent connection lifecycle
//! and exposes the program snapshot plus the activate/deactivate
//! command surface.
//!
//! ## How it works
//!
//! Each session spawns one IO task that drives
//! connect → authenticate → snapshot → ready, dispatches queued
//! commands in order, and reconnects with backoff when the transport
//! drops. The rest of the application only observes the state watch
//! and the command queue; the IO task is the single writer of both the
//! session state and the program cache.
//!
//! Sessions are created per run and torn down at run end — they are
//! never reused across days.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `holibot-app` and
//! `holibot-domain`.

mod config;
mod error;
mod events;
mod io;
pub mod protocol;

pub use config::HubConfig;
pub use error::HubError;
pub use events::{LogEvents, SessionEvents};

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;

use holibot_app::command_queue::CommandQueue;
use holibot_app::ports::ProgramHub;
use holibot_domain::command::OutboundCommand;
use holibot_domain::error::HolibotError;
use holibot_domain::program::AutomationProgram;
use holibot_domain::session::SessionState;

/// State shared between the session handle and its IO task.
pub(crate) struct Shared {
    pub(crate) config: HubConfig,
    pub(crate) state: watch::Sender<SessionState>,
    pub(crate) should_close: AtomicBool,
    pub(crate) close_requested: Notify,
    pub(crate) retries: AtomicU32,
    pub(crate) programs: RwLock<Vec<AutomationProgram>>,
    pub(crate) queue: CommandQueue,
    pub(crate) events: Box<dyn SessionEvents>,
}

impl Shared {
    pub(crate) fn set_state(&self, state: SessionState) {
        self.state.send_replace(state);
    }

    pub(crate) fn should_close(&self) -> bool {
        self.should_close.load(Ordering::SeqCst)
    }

    pub(crate) fn store_programs(&self, programs: Vec<AutomationProgram>) {
        *self
            .programs
            .write()
            .unwrap_or_else(PoisonError::into_inner) = programs;
    }

    pub(crate) fn programs(&self) -> Vec<AutomationProgram> {
        self.programs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A per-run websocket session against the hub.
///
/// Create one, call [`start`](Self::start), drive it through the
/// [`ProgramHub`] surface, and drop the whole thing at run end.
pub struct HubSession {
    shared: Arc<Shared>,
}

impl HubSession {
    /// Create a session with the default logging event handler.
    #[must_use]
    pub fn new(config: HubConfig) -> Self {
        Self::with_events(config, Box::new(LogEvents))
    }

    /// Create a session with a custom event handler.
    #[must_use]
    pub fn with_events(config: HubConfig, events: Box<dyn SessionEvents>) -> Self {
        let (state, _) = watch::channel(SessionState::Disconnected);
        Self {
            shared: Arc::new(Shared {
                config,
                state,
                should_close: AtomicBool::new(false),
                close_requested: Notify::new(),
                retries: AtomicU32::new(0),
                programs: RwLock::new(Vec::new()),
                queue: CommandQueue::new(),
                events,
            }),
        }
    }

    /// Spawn the IO task driving the connection. Non-blocking.
    pub fn start(&self) -> JoinHandle<()> {
        tokio::spawn(io::run(Arc::clone(&self.shared)))
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.state_rx().borrow()
    }

    /// Queue a raw command. Dropped when the session is not connected
    /// or is closing.
    pub fn send(&self, command: OutboundCommand) {
        self.shared.queue.enqueue(command);
    }

    fn state_rx(&self) -> watch::Receiver<SessionState> {
        self.shared.state.subscribe()
    }
}

impl ProgramHub for HubSession {
    async fn await_connected(&self) -> Result<(), HolibotError> {
        let mut rx = self.state_rx();
        let reached = rx
            .wait_for(|state| matches!(state, SessionState::Ready | SessionState::Closed))
            .await;
        match reached {
            Ok(state) if *state == SessionState::Ready => Ok(()),
            // Closed before Ready, or the IO task is gone: the initial
            // connect failed.
            _ => Err(HubError::NeverReady.into()),
        }
    }

    fn programs(&self) -> Vec<AutomationProgram> {
        self.shared.programs()
    }

    async fn activate_program(&self, program_id: u64) {
        tracing::debug!(program_id, "activate program");
        self.send(OutboundCommand::activate(program_id));
    }

    async fn deactivate_program(&self, program_id: u64) {
        tracing::debug!(program_id, "deactivate program");
        self.send(OutboundCommand::deactivate(program_id));
    }

    async fn await_drained(&self) {
        self.shared.queue.await_drained().await;
    }

    fn disconnect(&self) {
        self.shared.should_close.store(true, Ordering::SeqCst);
        self.shared.queue.set_accepting(false);
        self.shared.close_requested.notify_one();
    }

    async fn await_disconnected(&self) {
        let mut rx = self.state_rx();
        let _ = rx.wait_for(|state| state.is_terminal()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_disconnected_state() {
        let session = HubSession::new(HubConfig::default());
        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(session.programs().is_empty());
    }

    #[tokio::test]
    async fn should_drop_commands_before_connection() {
        let session = HubSession::new(HubConfig::default());
        session.send(OutboundCommand::activate(1));
        assert!(session.shared.queue.is_empty());
        // Nothing queued, so the drain signal is still set.
        session.await_drained().await;
    }
}
