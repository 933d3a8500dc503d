//! # koyomi-time
//!
//! Date and weekday types for koyomi-rs.
//!
//! Dates are represented as a serial number of days since an epoch:
//! serial 1 = January 1, 1900. The valid range is 1900-01-01 to
//! 2199-12-31. The 1900 epoch is shared with the sexagenary day-count
//! convention used by the calendar engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use weekday::Weekday;
