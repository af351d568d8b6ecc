//! Daily run window — fire once per day inside a fixed local-time
//! window.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};

/// Decides when the daily run is due.
///
/// The outer loop polls at a fixed interval; a run is due when the
/// local time falls inside `[start, end)` and no run has been claimed
/// today. Last-run tracking lives in memory and spans the polling
/// interval, so several polls inside the same window fire exactly
/// once.
#[derive(Debug)]
pub struct DailySchedule {
    window_start: NaiveTime,
    window_end: NaiveTime,
    last_run: Option<NaiveDate>,
}

impl DailySchedule {
    pub fn new(window_start: NaiveTime, window_end: NaiveTime) -> Self {
        Self {
            window_start,
            window_end,
            last_run: None,
        }
    }

    /// Whether a run is due at `now`. A true answer claims today, so
    /// later polls in the same window return false.
    pub fn try_claim(&mut self, now: DateTime<Local>) -> bool {
        let time = now.time();
        if time < self.window_start || time >= self.window_end {
            return false;
        }
        let today = now.date_naive();
        if self.last_run == Some(today) {
            return false;
        }
        self.last_run = Some(today);
        true
    }
}
