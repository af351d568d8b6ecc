//! # holibot-adapter-holiday-http
//!
//! HTTP client for the public-holiday service, implementing the
//! [`HolidayProvider`] port.
//!
//! The service exposes one endpoint per year and country:
//! `GET {base}/api/v3/PublicHolidays/{year}/{countryCode}` returning a
//! JSON array of `{date, counties, …}` records.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `holibot-app` and
//! `holibot-domain`.

mod error;

pub use error::HolidayApiError;

use holibot_app::ports::HolidayProvider;
use holibot_domain::holiday::HolidayRecord;

/// Default public holiday service.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at";

/// Client for the public-holiday HTTP API.
#[derive(Debug, Clone)]
pub struct HolidayApi {
    http: reqwest::Client,
    base_url: String,
}

impl HolidayApi {
    /// Create a client against the given service base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, year: i32, country: &str) -> String {
        format!("{}/api/v3/PublicHolidays/{year}/{country}", self.base_url)
    }
}

impl Default for HolidayApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HolidayProvider for HolidayApi {
    type Error = HolidayApiError;

    async fn holidays(
        &self,
        year: i32,
        country: &str,
    ) -> Result<Vec<HolidayRecord>, HolidayApiError> {
        let url = self.endpoint(year, country);
        tracing::debug!(%url, "fetching public holidays");

        let records = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<HolidayRecord>>()
            .await?;

        tracing::debug!(count = records.len(), year, country, "holidays fetched");
        Ok(records)
    }
}
