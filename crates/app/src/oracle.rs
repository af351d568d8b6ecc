//! Holiday oracle — answers "is this day a holiday or a bridge day".

use chrono::{Datelike, NaiveDate};

use holibot_domain::decision::{DayKind, bridge_candidate};
use holibot_domain::holiday;

use crate::ports::HolidayProvider;

/// Classifies calendar days against the configured region's public
/// holidays.
///
/// Lookups fail safe: when the provider errors, the day counts as a
/// regular working day rather than blocking normal operation.
pub struct HolidayOracle<P> {
    provider: P,
    region: String,
    country: String,
}

impl<P: HolidayProvider> HolidayOracle<P> {
    pub fn new(provider: P, region: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            provider,
            region: region.into(),
            country: country.into(),
        }
    }

    /// Whether `date` is a public holiday in the configured region.
    ///
    /// Provider failures are logged and answered with `false`.
    pub async fn is_public_holiday(&self, date: NaiveDate) -> bool {
        match self.provider.holidays(date.year(), &self.country).await {
            Ok(records) => holiday::contains_holiday(&records, date, &self.region),
            Err(err) => {
                tracing::error!(
                    %err,
                    year = date.year(),
                    country = %self.country,
                    "holiday lookup failed, treating day as regular"
                );
                false
            }
        }
    }

    /// Whether `date` is a bridge day: a Monday before a holiday or a
    /// Thursday after one.
    pub async fn is_bridge_day(&self, date: NaiveDate) -> bool {
        match bridge_candidate(date) {
            Some(adjacent) => self.is_public_holiday(adjacent).await,
            None => false,
        }
    }

    /// Classify `date`. A same-day holiday wins; the bridge-day check
    /// only runs for days that are not holidays themselves.
    pub async fn classify(&self, date: NaiveDate) -> DayKind {
        if self.is_public_holiday(date).await {
            DayKind::Holiday
        } else if self.is_bridge_day(date).await {
            DayKind::BridgeDay
        } else {
            DayKind::Regular
        }
    }
}
