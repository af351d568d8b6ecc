//! Port definitions — traits the adapters must implement.

pub mod holiday;
pub mod hub;

pub use holiday::HolidayProvider;
pub use hub::ProgramHub;
