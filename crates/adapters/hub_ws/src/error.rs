//! Hub adapter error types.

use holibot_domain::error::HolibotError;

/// Errors specific to the websocket hub adapter.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// The websocket connection could not be established.
    #[error("failed to connect to hub")]
    Connect(#[source] tokio_tungstenite::tungstenite::Error),

    /// Sending a frame failed.
    #[error("failed to send to hub")]
    Send(#[source] tokio_tungstenite::tungstenite::Error),

    /// Receiving a frame failed.
    #[error("failed to receive from hub")]
    Receive(#[source] tokio_tungstenite::tungstenite::Error),

    /// The session terminated before reaching readiness.
    #[error("session closed before becoming ready")]
    NeverReady,
}

impl From<HubError> for HolibotError {
    fn from(err: HubError) -> Self {
        HolibotError::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_never_ready_error() {
        assert_eq!(
            HubError::NeverReady.to_string(),
            "session closed before becoming ready"
        );
    }

    #[test]
    fn should_convert_into_transport_error() {
        let err: HolibotError = HubError::NeverReady.into();
        assert!(matches!(err, HolibotError::Transport(_)));
    }
}
