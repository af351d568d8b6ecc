//! Hub session connection states.

use std::fmt;

/// Lifecycle state of a hub session.
///
/// The session's IO task is the only writer; everyone else observes
/// transitions through a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
    Ready,
    Closing,
    Closed,
}

impl SessionState {
    /// Whether the transport is established and commands may be queued.
    #[must_use]
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected | Self::Ready)
    }

    /// Whether the session has fully terminated.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Ready => "ready",
            Self::Closing => "closing",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_connected_states() {
        assert!(SessionState::Connected.is_connected());
        assert!(SessionState::Ready.is_connected());
        assert!(!SessionState::Connecting.is_connected());
        assert!(!SessionState::Closing.is_connected());
        assert!(!SessionState::Closed.is_connected());
    }

    #[test]
    fn should_only_treat_closed_as_terminal() {
        assert!(SessionState::Closed.is_terminal());
        assert!(!SessionState::Disconnected.is_terminal());
        assert!(!SessionState::Ready.is_terminal());
    }

    #[test]
    fn should_display_lowercase_state_names() {
        assert_eq!(SessionState::Ready.to_string(), "ready");
        assert_eq!(SessionState::Closing.to_string(), "closing");
    }
}
