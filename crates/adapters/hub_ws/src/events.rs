//! Typed session event hooks.

use holibot_domain::program::AutomationProgram;

use crate::error::HubError;

/// Observer for session lifecycle events, one method per event.
///
/// All methods default to no-ops; [`LogEvents`] provides the standard
/// logging behavior. Handlers run on the session's IO task and must
/// not block.
pub trait SessionEvents: Send + Sync {
    /// The transport (re)connected and the handshake went through.
    /// `retries` counts the reconnect attempts that preceded this
    /// success, zero on a clean first connect.
    fn on_connected(&self, retries: u32) {
        let _ = retries;
    }

    /// A full-state snapshot was received and cached.
    fn on_snapshot(&self, programs: &[AutomationProgram]) {
        let _ = programs;
    }

    /// The transport dropped. `requested` is true for explicit
    /// disconnects.
    fn on_disconnected(&self, requested: bool) {
        let _ = requested;
    }

    /// A non-fatal error occurred on the connection.
    fn on_error(&self, error: &HubError) {
        let _ = error;
    }
}

/// Default handler emitting the session's standard log lines.
pub struct LogEvents;

impl SessionEvents for LogEvents {
    fn on_connected(&self, retries: u32) {
        if retries > 0 {
            tracing::warn!(retries, "hub reconnected after retries");
        } else {
            tracing::debug!("hub connected");
        }
    }

    fn on_snapshot(&self, programs: &[AutomationProgram]) {
        tracing::debug!(count = programs.len(), "program snapshot cached");
    }

    fn on_disconnected(&self, requested: bool) {
        if requested {
            tracing::debug!("hub disconnected");
        } else {
            tracing::warn!("hub connection dropped");
        }
    }

    fn on_error(&self, error: &HubError) {
        tracing::error!(%error, "hub session error");
    }
}
