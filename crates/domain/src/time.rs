//! Time and timestamp helpers.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// UTC timestamp used for last-run tracking, event times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return today's calendar date in local time.
///
/// Holiday matching is calendar-day granular and the holiday service
/// publishes civil dates, so the local date is the one that matters.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
