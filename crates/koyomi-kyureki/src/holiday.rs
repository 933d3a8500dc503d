//! National-holiday resolution.
//!
//! Resolution order: fixed-date table, nth-Monday floating holidays,
//! equinox days, and finally the citizens'-holiday rule for a Monday
//! sandwiched between two holidays. The sandwich check only runs when
//! the day itself is a Monday – an approximation of the unconditional
//! real-world rule, preserved from the source material. The substitute
//! Monday (振替休日) rule is likewise not modeled.

use std::collections::HashMap;

use crate::astronomy::{autumnal_equinox_day, spring_equinox_day};
use koyomi_time::{Date, Weekday};

/// Fixed-date national holidays, keyed by (month, day).
const FIXED_HOLIDAYS: [(u8, u8, &str); 10] = [
    (1, 1, "元日"),
    (2, 11, "建国記念の日"),
    (2, 23, "天皇誕生日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (8, 11, "山の日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
];

/// Holiday resolver with per-date memoization.
///
/// Results are cached by (year, month, day); once computed for a date
/// they are never recomputed. The cache is owned by this instance.
#[derive(Debug, Default)]
pub struct HolidayResolver {
    cache: HashMap<(u16, u8, u8), Option<&'static str>>,
}

impl HolidayResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// The holiday name for `date`, or `None` on a regular day.
    pub fn holiday_for(&mut self, date: Date) -> Option<&'static str> {
        let key = (date.year(), date.month(), date.day_of_month());
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }
        let resolved = Self::resolve(date);
        self.cache.insert(key, resolved);
        resolved
    }

    fn resolve(date: Date) -> Option<&'static str> {
        let year = date.year();
        let month = date.month();
        let day = date.day_of_month();
        let weekday = date.weekday();

        let named = fixed_holiday(month, day)
            .or_else(|| floating_holiday(month, day, weekday))
            .or_else(|| equinox_holiday(year, month, day));
        if named.is_some() {
            return named;
        }

        // A Monday between two holidays becomes 国民の休日.
        if weekday == Weekday::Monday {
            let before = date.add_days(-1).is_ok_and(|d| is_observed(d));
            let after = date.add_days(1).is_ok_and(|d| is_observed(d));
            if before && after {
                return Some("国民の休日");
            }
        }

        None
    }
}

fn fixed_holiday(month: u8, day: u8) -> Option<&'static str> {
    FIXED_HOLIDAYS
        .iter()
        .find(|&&(m, d, _)| m == month && d == day)
        .map(|&(_, _, name)| name)
}

/// Nth-Monday holidays, expressed as day-of-month windows.
fn floating_holiday(month: u8, day: u8, weekday: Weekday) -> Option<&'static str> {
    if weekday != Weekday::Monday {
        return None;
    }
    match month {
        1 if (8..=14).contains(&day) => Some("成人の日"),
        7 if (15..=21).contains(&day) => Some("海の日"),
        9 if (15..=21).contains(&day) => Some("敬老の日"),
        10 if (8..=14).contains(&day) => Some("スポーツの日"),
        _ => None,
    }
}

/// Equinox holidays, re-derived from the linear formulas directly rather
/// than read from a cached per-year term table.
fn equinox_holiday(year: u16, month: u8, day: u8) -> Option<&'static str> {
    match month {
        3 if day == spring_equinox_day(year) => Some("春分の日"),
        9 if day == autumnal_equinox_day(year) => Some("秋分の日"),
        _ => None,
    }
}

/// Whether a date counts as a holiday for the sandwich rule: a fixed
/// holiday or an equinox day (floating holidays do not participate).
fn is_observed(date: Date) -> bool {
    let (year, month, day) = (date.year(), date.month(), date.day_of_month());
    fixed_holiday(month, day).is_some() || equinox_holiday(year, month, day).is_some()
}
