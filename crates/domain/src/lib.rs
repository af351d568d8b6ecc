//! # holibot-domain
//!
//! Pure domain model for the holibot daily automation agent.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, calendar helpers
//! - Define **AutomationProgram** (the hub entities the agent toggles)
//!   and the name matching that locates the two target programs
//! - Define **OutboundCommand** (the wire strings queued for the hub)
//! - Define **HolidayRecord** and region filtering
//! - Define the **daily decision**: day classification (holiday, bridge
//!   day, regular) and the program actions it implies
//! - Define **SessionState** (the hub connection lifecycle)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod decision;
pub mod holiday;
pub mod program;
pub mod session;
