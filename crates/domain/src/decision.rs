//! The daily decision — day classification and the program actions it
//! implies.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::program::AutomationProgram;

/// How the current day was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Today itself is a public holiday.
    Holiday,
    /// A working day bridging a holiday and a weekend.
    BridgeDay,
    /// An ordinary working day.
    Regular,
}

impl DayKind {
    /// Whether the vacation program should drive the morning.
    #[must_use]
    pub fn is_day_off(self) -> bool {
        matches!(self, Self::Holiday | Self::BridgeDay)
    }
}

/// The adjacent date whose holiday status decides whether `date` is a
/// bridge day.
///
/// Only Mondays (check tomorrow) and Thursdays (check yesterday) are
/// bridge candidates: a single floating holiday next to a weekend is
/// what creates the bridge. Tuesday, Wednesday and Friday never
/// qualify.
#[must_use]
pub fn bridge_candidate(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Mon => date.checked_add_days(Days::new(1)),
        Weekday::Thu => date.checked_sub_days(Days::new(1)),
        _ => None,
    }
}

/// One planned toggle against the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramAction {
    Activate(u64),
    Deactivate(u64),
}

/// The outcome of one daily decision cycle.
///
/// Either resolved program may be absent when the hub's catalog does
/// not contain the expected name; planning then skips that side.
#[derive(Debug, Clone)]
pub struct Decision {
    pub kind: DayKind,
    pub normal: Option<AutomationProgram>,
    pub vacation: Option<AutomationProgram>,
}

impl Decision {
    /// Derive the commands this decision requires, in dispatch order.
    ///
    /// On a holiday or bridge day the vacation program wins
    /// unconditionally. On a regular day the pair is reactivated only
    /// when it drifted out of steady state (normal inactive, or
    /// vacation still active) — reruns on an already-correct day plan
    /// nothing.
    #[must_use]
    pub fn plan(&self) -> Vec<ProgramAction> {
        let mut actions = Vec::new();
        if self.kind.is_day_off() {
            if let Some(vacation) = &self.vacation {
                actions.push(ProgramAction::Activate(vacation.id));
            }
            if let Some(normal) = &self.normal {
                actions.push(ProgramAction::Deactivate(normal.id));
            }
        } else {
            let normal_inactive = self.normal.as_ref().is_some_and(|program| !program.active);
            let vacation_active = self.vacation.as_ref().is_some_and(|program| program.active);
            if normal_inactive || vacation_active {
                if let Some(normal) = &self.normal {
                    actions.push(ProgramAction::Activate(normal.id));
                }
                if let Some(vacation) = &self.vacation {
                    actions.push(ProgramAction::Deactivate(vacation.id));
                }
            }
        }
        actions
    }
}
