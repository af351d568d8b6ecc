//! Hub session port — the minimal program-toggling surface of a live
//! hub connection.

use std::future::Future;

use holibot_domain::error::HolibotError;
use holibot_domain::program::AutomationProgram;

/// A live hub session, driven by its own IO task.
///
/// The runner only ever talks to this surface: wait for readiness,
/// read the snapshot, queue toggles, wait for the queue to flush,
/// close. The websocket adapter implements it for real sessions; tests
/// implement it in memory.
pub trait ProgramHub {
    /// Suspend until the session is fully authenticated and the first
    /// full-state snapshot has been cached.
    ///
    /// # Errors
    ///
    /// Returns an error when the session terminates before ever
    /// reaching readiness (initial connect failure).
    fn await_connected(&self) -> impl Future<Output = Result<(), HolibotError>> + Send;

    /// Latest cached snapshot of automation programs, in hub order.
    /// Empty before the session is ready.
    fn programs(&self) -> Vec<AutomationProgram>;

    /// Queue an activate command. Fire-and-forget from the caller's
    /// perspective, but strictly ordered relative to other commands.
    fn activate_program(&self, program_id: u64) -> impl Future<Output = ()> + Send;

    /// Queue a deactivate command.
    fn deactivate_program(&self, program_id: u64) -> impl Future<Output = ()> + Send;

    /// Suspend until every queued command has been dispatched.
    fn await_drained(&self) -> impl Future<Output = ()> + Send;

    /// Request session teardown.
    fn disconnect(&self);

    /// Suspend until the session transport is fully torn down.
    fn await_disconnected(&self) -> impl Future<Output = ()> + Send;
}
