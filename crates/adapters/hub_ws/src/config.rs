//! Hub connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the websocket hub session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Hub hostname or IP address.
    pub host: String,
    /// Websocket port.
    pub port: u16,
    /// Account used for the authentication handshake.
    pub username: String,
    /// Password for the authentication handshake.
    pub password: String,
    /// First reconnect delay in seconds; doubles per retry.
    pub reconnect_initial_secs: u64,
    /// Upper bound for the reconnect delay in seconds.
    pub reconnect_max_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 7681,
            username: String::new(),
            password: String::new(),
            reconnect_initial_secs: 2,
            reconnect_max_secs: 60,
        }
    }
}

impl HubConfig {
    /// The websocket endpoint this config points at.
    #[must_use]
    pub fn url(&self) -> String {
        format!("ws://{}:{}/connection", self.host, self.port)
    }

    /// Delay before reconnect attempt number `retries` (1-based).
    ///
    /// Exponential, capped at `reconnect_max_secs`.
    #[must_use]
    pub fn backoff(&self, retries: u32) -> Duration {
        let exponent = retries.saturating_sub(1).min(5);
        let delay = self.reconnect_initial_secs.saturating_mul(1 << exponent);
        Duration::from_secs(delay.min(self.reconnect_max_secs))
    }
}
