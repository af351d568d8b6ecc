//! Common error types used across the workspace.
//!
//! Each adapter defines its own typed error enum and converts into one
//! of these variants at the port boundary.

/// Top-level error shared across layers.
#[derive(Debug, thiserror::Error)]
pub enum HolibotError {
    /// Connect/send/receive failure on the hub transport.
    #[error("hub transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The hub sent a message that violates the wire protocol.
    #[error("hub protocol error: {0}")]
    Protocol(String),

    /// Invalid or missing configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HolibotError {
    /// Wrap any transport-level source error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}
