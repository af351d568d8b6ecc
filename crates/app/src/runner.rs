//! Daily decision runner — one full toggle cycle against the hub.

use chrono::NaiveDate;

use holibot_domain::decision::{DayKind, Decision, ProgramAction};
use holibot_domain::error::HolibotError;
use holibot_domain::program::{AutomationProgram, ProgramMatcher};

use crate::oracle::HolidayOracle;
use crate::ports::{HolidayProvider, ProgramHub};

/// Orchestrates one daily cycle: wait for the hub to become ready,
/// classify the day, resolve the two target programs, toggle the pair,
/// then flush the queue and close the session.
pub struct DailyDecisionRunner<P> {
    oracle: HolidayOracle<P>,
    normal: ProgramMatcher,
    vacation: ProgramMatcher,
}

impl<P: HolidayProvider> DailyDecisionRunner<P> {
    pub fn new(oracle: HolidayOracle<P>, normal: ProgramMatcher, vacation: ProgramMatcher) -> Self {
        Self {
            oracle,
            normal,
            vacation,
        }
    }

    /// Run one full cycle against `hub` for `today`.
    ///
    /// A target program missing from the snapshot is logged and its
    /// toggle skipped; the cycle still completes and closes the
    /// session.
    ///
    /// # Errors
    ///
    /// Only the initial connection surfaces an error. Everything after
    /// readiness is logged and degraded per failure.
    pub async fn run<H: ProgramHub>(
        &self,
        hub: &H,
        today: NaiveDate,
    ) -> Result<Decision, HolibotError> {
        hub.await_connected().await?;

        let programs = hub.programs();
        tracing::info!(count = programs.len(), "received program snapshot");

        let kind = self.oracle.classify(today).await;
        match kind {
            DayKind::Holiday => tracing::info!(%today, "today is a public holiday"),
            DayKind::BridgeDay => tracing::info!(%today, "today is a bridge day"),
            DayKind::Regular => tracing::info!(%today, "regular working day"),
        }

        let decision = Decision {
            kind,
            normal: resolve(&programs, &self.normal).cloned(),
            vacation: resolve(&programs, &self.vacation).cloned(),
        };

        let actions = decision.plan();
        if actions.is_empty() {
            tracing::info!("programs already in the desired state, nothing to send");
        }
        for action in &actions {
            match action {
                ProgramAction::Activate(id) => hub.activate_program(*id).await,
                ProgramAction::Deactivate(id) => hub.deactivate_program(*id).await,
            }
        }

        hub.await_drained().await;
        hub.disconnect();
        hub.await_disconnected().await;

        Ok(decision)
    }
}

fn resolve<'a>(
    programs: &'a [AutomationProgram],
    matcher: &ProgramMatcher,
) -> Option<&'a AutomationProgram> {
    let found = matcher.find(programs);
    match found {
        Some(program) => tracing::debug!(
            id = program.id,
            name = %program.name,
            active = program.active,
            "resolved target program"
        ),
        None => tracing::warn!(
            name = %matcher.plain(),
            "target program not found in hub snapshot"
        ),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use holibot_domain::holiday::HolidayRecord;

    use crate::ports::HolidayProvider;

    #[derive(Debug, thiserror::Error)]
    #[error("holiday service unreachable")]
    struct Unreachable;

    struct FixedProvider(Vec<HolidayRecord>);

    impl HolidayProvider for FixedProvider {
        type Error = Unreachable;

        async fn holidays(
            &self,
            _year: i32,
            _country: &str,
        ) -> Result<Vec<HolidayRecord>, Unreachable> {
            Ok(self.0.clone())
        }
    }

    /// In-memory hub recording every call in order.
    struct MockHub {
        programs: Vec<AutomationProgram>,
        calls: Mutex<Vec<String>>,
    }

    impl MockHub {
        fn new(programs: Vec<AutomationProgram>) -> Self {
            Self {
                programs,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn commands(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter(|call| call.starts_with("activate") || call.starts_with("deactivate"))
                .collect()
        }
    }

    impl ProgramHub for MockHub {
        async fn await_connected(&self) -> Result<(), HolibotError> {
            self.record("ready");
            Ok(())
        }

        fn programs(&self) -> Vec<AutomationProgram> {
            self.programs.clone()
        }

        async fn activate_program(&self, program_id: u64) {
            self.record(format!("activate {program_id}"));
        }

        async fn deactivate_program(&self, program_id: u64) {
            self.record(format!("deactivate {program_id}"));
        }

        async fn await_drained(&self) {
            self.record("drained");
        }

        fn disconnect(&self) {
            self.record("disconnect");
        }

        async fn await_disconnected(&self) {
            self.record("closed");
        }
    }

    fn program(id: u64, name: &str, active: bool) -> AutomationProgram {
        AutomationProgram {
            id,
            name: name.to_string(),
            active,
        }
    }

    fn runner(records: Vec<HolidayRecord>) -> DailyDecisionRunner<FixedProvider> {
        DailyDecisionRunner::new(
            HolidayOracle::new(FixedProvider(records), "DE-NW", "DE"),
            ProgramMatcher::new("Morning scene"),
            ProgramMatcher::new("Morning scene vacation"),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday_on(y: i32, m: u32, d: u32) -> HolidayRecord {
        HolidayRecord {
            date: date(y, m, d),
            counties: None,
        }
    }

    #[tokio::test]
    async fn should_switch_to_vacation_on_monday_bridge_day() {
        // 2026-05-04 is a Monday; the holiday falls on the Tuesday.
        let hub = MockHub::new(vec![
            program(1, "Morning scene", true),
            program(2, "Morning scene vacation", false),
        ]);
        let runner = runner(vec![holiday_on(2026, 5, 5)]);

        let decision = runner.run(&hub, date(2026, 5, 4)).await.unwrap();

        assert_eq!(decision.kind, DayKind::BridgeDay);
        assert_eq!(hub.commands(), vec!["activate 2", "deactivate 1"]);
    }

    #[tokio::test]
    async fn should_issue_nothing_on_regular_wednesday_in_steady_state() {
        // 2026-05-06 is a Wednesday with no matching holiday record.
        let hub = MockHub::new(vec![
            program(1, "Morning scene", true),
            program(2, "Morning scene vacation", false),
        ]);
        let runner = runner(vec![holiday_on(2026, 12, 25)]);

        let decision = runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        assert_eq!(decision.kind, DayKind::Regular);
        assert!(hub.commands().is_empty());
    }

    #[tokio::test]
    async fn should_be_idempotent_across_consecutive_runs() {
        let hub = MockHub::new(vec![
            program(1, "Morning scene", true),
            program(2, "Morning scene vacation", false),
        ]);
        let runner = runner(Vec::new());

        runner.run(&hub, date(2026, 5, 6)).await.unwrap();
        let first = hub.commands().len();
        runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        assert_eq!(first, 0);
        assert_eq!(hub.commands().len(), 0);
    }

    #[tokio::test]
    async fn should_reactivate_normal_after_vacation_day() {
        // Regular day, but the vacation program was left active.
        let hub = MockHub::new(vec![
            program(1, "Morning scene", false),
            program(2, "Morning scene vacation", true),
        ]);
        let runner = runner(Vec::new());

        runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        assert_eq!(hub.commands(), vec!["activate 1", "deactivate 2"]);
    }

    #[tokio::test]
    async fn should_skip_toggle_for_missing_program() {
        // Vacation program renamed on the hub: only the resolvable
        // side is driven.
        let hub = MockHub::new(vec![program(1, "Morning scene", true)]);
        let runner = runner(vec![holiday_on(2026, 5, 6)]);

        let decision = runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        assert_eq!(decision.kind, DayKind::Holiday);
        assert!(decision.vacation.is_none());
        assert_eq!(hub.commands(), vec!["deactivate 1"]);
    }

    #[tokio::test]
    async fn should_match_encoded_program_spelling() {
        let hub = MockHub::new(vec![
            program(1, "Morning%20scene", false),
            program(2, "Morning scene vacation", false),
        ]);
        let runner = runner(Vec::new());

        runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        assert_eq!(hub.commands(), vec!["activate 1", "deactivate 2"]);
    }

    #[tokio::test]
    async fn should_drain_before_closing_the_session() {
        let hub = MockHub::new(vec![
            program(1, "Morning scene", false),
            program(2, "Morning scene vacation", false),
        ]);
        let runner = runner(Vec::new());

        runner.run(&hub, date(2026, 5, 6)).await.unwrap();

        let calls = hub.calls();
        let drained = calls.iter().position(|c| c == "drained").unwrap();
        let disconnect = calls.iter().position(|c| c == "disconnect").unwrap();
        let closed = calls.iter().position(|c| c == "closed").unwrap();
        assert!(calls.iter().position(|c| c == "ready").unwrap() < drained);
        assert!(drained < disconnect);
        assert!(disconnect < closed);
    }
}
