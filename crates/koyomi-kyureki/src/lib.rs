//! # koyomi-kyureki
//!
//! Japanese lunisolar calendar (kyūreki) computation engine.
//!
//! The engine derives, for any solar date, the traditional calendar
//! annotations used by Japanese calendars: the lunisolar year/month/day
//! approximated from new-moon boundaries, the six-day Rokuyō cycle, the
//! 24 solar terms (sekki), the era name and era-relative year, the
//! sexagenary day stem/branch, the year zodiac branch, national holidays
//! including the citizens'-holiday rule, and three auspicious-day flags.
//!
//! All computations are approximations built on a fixed mean synodic
//! month and linear solar-term formulas; they intentionally do not
//! implement leap-month insertion or the winter-solstice year-start rule
//! of the authentic lunisolar calendar. See the individual modules for
//! which corners are approximate.
//!
//! # Example
//!
//! ```
//! use koyomi_kyureki::Koyomi;
//! use koyomi_time::Date;
//!
//! let mut koyomi = Koyomi::new();
//! let info = koyomi.info_for(Date::from_ymd(2024, 1, 1).unwrap()).unwrap();
//!
//! assert_eq!(info.holiday, Some("元日"));
//! assert_eq!(info.rokuyo.name(), "友引");
//! assert_eq!(info.era.name(), "令和");
//! assert_eq!(info.era.year, 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// New-moon approximation and solar-term date formulas.
pub mod astronomy;

/// `CalendarDayInfo` aggregate record and the `Koyomi` façade.
pub mod calendar_info;

/// Era (gengō) table and resolution.
pub mod era;

/// National-holiday resolution.
pub mod holiday;

/// Solar-to-lunisolar date conversion.
pub mod lunisolar;

/// Six-day Rokuyō cycle.
pub mod rokuyo;

/// Per-year solar-term lookup.
pub mod sekki;

/// `SolarTerm` — the 24 solar terms.
pub mod solar_term;

/// Sexagenary stems/branches and auspicious-day flags.
pub mod special_day;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use astronomy::NewMoonEvent;
pub use calendar_info::{CalendarDayInfo, Koyomi};
pub use era::{era_for, Era, EraYear};
pub use holiday::HolidayResolver;
pub use lunisolar::{LunisolarConverter, LunisolarDate, MonthAnchors};
pub use rokuyo::Rokuyo;
pub use sekki::{SekkiLookup, SekkiOccurrence};
pub use solar_term::SolarTerm;
pub use special_day::{special_days, Branch, SpecialDays, Stem};
