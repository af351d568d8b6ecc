//! Monitoring heartbeat — best-effort GET against a configured URL.

/// Pings an external monitoring endpoint so a silent holibotd gets
/// noticed. Failures are logged and never retried.
pub struct Heartbeat {
    http: reqwest::Client,
    url: String,
}

impl Heartbeat {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Fire one heartbeat.
    pub async fn send(&self) {
        tracing::debug!(url = %self.url, "sending heartbeat");
        match self.http.get(&self.url).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                tracing::warn!(status = %response.status(), "heartbeat rejected");
            }
            Err(err) => {
                tracing::warn!(%err, "could not send heartbeat");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_not_panic_when_endpoint_unreachable() {
        let heartbeat = Heartbeat::new("http://127.0.0.1:1/ping".to_string());
        heartbeat.send().await;
    }
}
