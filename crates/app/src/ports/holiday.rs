//! Holiday provider port.

use std::future::Future;

use holibot_domain::holiday::HolidayRecord;

/// Source of public-holiday data for one Gregorian year.
///
/// This is a **port** — the HTTP adapter implements it against the
/// remote holiday service; tests implement it in memory. Callers treat
/// any failure as "no holiday data" (the oracle fails safe), so the
/// error type only feeds log context.
pub trait HolidayProvider: Send + Sync {
    /// The error reported on lookup failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch all public holidays for `year` in `country` (ISO 3166-1
    /// alpha-2 code).
    fn holidays(
        &self,
        year: i32,
        country: &str,
    ) -> impl Future<Output = Result<Vec<HolidayRecord>, Self::Error>> + Send;
}
