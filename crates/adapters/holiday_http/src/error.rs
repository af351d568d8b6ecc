//! Holiday adapter error types.

/// Errors from the public-holiday service.
///
/// These never cross the runner boundary: the oracle's fail-safe maps
/// every failure to "not a holiday" and only logs the error.
#[derive(Debug, thiserror::Error)]
pub enum HolidayApiError {
    /// Request failed: connection, non-success status, or undecodable
    /// body.
    #[error("holiday service request failed")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_request_error() {
        let source = reqwest::Client::new()
            .get("this is not a url")
            .build()
            .unwrap_err();
        let err = HolidayApiError::from(source);
        assert_eq!(err.to_string(), "holiday service request failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
