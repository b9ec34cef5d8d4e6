//! CPL § 30.30 calculation core.
//!
//! Pure, synchronous functions over `NaiveDate`. Nothing here reads the
//! wall clock; callers pass the reference date in.

pub mod adjustment;
pub mod calendar;
pub mod clock;
pub mod deadline_engine;
pub mod exclusions;
pub mod holidays;
pub mod validation;

pub use calendar::CalendarError;
