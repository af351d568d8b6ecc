//! # holibot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement
//!   (driven/outbound ports):
//!   - `HolidayProvider` — public-holiday data for a year/country
//!   - `ProgramHub` — the minimal program-toggling surface of a live
//!     hub session
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   the per-session [`CommandQueue`](command_queue::CommandQueue) with
//!   its drain tracker
//! - Implement the use-cases: the [`HolidayOracle`](oracle::HolidayOracle)
//!   day classification and the [`DailyDecisionRunner`](runner::DailyDecisionRunner)
//!   toggle cycle
//!
//! ## Dependency rule
//! Depends on `holibot-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not
//! the reverse.

pub mod command_queue;
pub mod oracle;
pub mod ports;
pub mod runner;
