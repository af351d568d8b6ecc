//! Outbound hub commands.

use std::fmt;

/// An opaque protocol string queued for the hub.
///
/// Commands are dispatched strictly in enqueue order; there is no
/// dedup and no coalescing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCommand(String);

impl OutboundCommand {
    /// Command switching a program on.
    #[must_use]
    pub fn activate(program_id: u64) -> Self {
        Self(format!("PUT:programs/{program_id}?active=1"))
    }

    /// Command switching a program off.
    #[must_use]
    pub fn deactivate(program_id: u64) -> Self {
        Self(format!("PUT:programs/{program_id}?active=0"))
    }

    /// Wrap a raw protocol string.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutboundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
