//! Solar-to-lunisolar (kyūreki) date conversion.
//!
//! The lunisolar month and year are taken from the calendar month/year in
//! which the governing new moon fell, and the day is the 1-based offset
//! from that new moon. This is a simplification: there is no leap-month
//! insertion and no winter-solstice year-start rule, so the derived
//! month/year can differ from the authentic kyūreki around month
//! boundaries.

use std::collections::HashMap;

use crate::astronomy::{nearest_preceding_new_moon, NewMoonEvent};
use koyomi_core::{ensure, errors::Result};
use koyomi_time::Date;

/// Traditional names of the twelve lunisolar months (和風月名).
const MONTH_NAMES: [&str; 12] = [
    "睦月", "如月", "弥生", "卯月", "皐月", "水無月", "文月", "葉月", "長月", "神無月", "霜月",
    "師走",
];

/// A lunisolar calendar date.
///
/// `day` is the 1-based offset from the governing new moon, so day 1 is
/// the new-moon date itself and the value never exceeds 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunisolarDate {
    /// Calendar year of the governing new moon.
    pub year: i32,
    /// Calendar month (1–12) of the governing new moon.
    pub month: u8,
    /// 1-based day offset from the governing new moon.
    pub day: u8,
}

impl LunisolarDate {
    /// The traditional Japanese name of the month (睦月 … 師走).
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }
}

/// The new-moon anchors cached for one (year, month) of the solar
/// calendar: three probes around the month.
#[derive(Debug, Clone, Copy)]
pub struct MonthAnchors {
    /// New moon preceding the 28th of the previous month.
    pub prev_month: NewMoonEvent,
    /// New moon preceding the 1st of the month.
    pub month_start: NewMoonEvent,
    /// New moon preceding the 1st of the next month – the new moon that
    /// falls within the month itself.
    pub in_month: NewMoonEvent,
}

/// Converter from solar to lunisolar dates.
///
/// Anchors are cached per (year, month) so that day-by-day iteration over
/// a month computes each probe once. The cache is append-only and owned
/// by this instance.
#[derive(Debug, Default)]
pub struct LunisolarConverter {
    anchors: HashMap<(u16, u8), MonthAnchors>,
}

impl LunisolarConverter {
    /// Create an empty converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached new-moon anchors for a solar (year, month).
    pub fn month_anchors(&mut self, year: u16, month: u8) -> Result<&MonthAnchors> {
        ensure!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let key = (year, month);
        if !self.anchors.contains_key(&key) {
            let y = year as i32;
            let m = month as i32;
            let computed = MonthAnchors {
                prev_month: nearest_preceding_new_moon(y, m - 1, 28)?,
                month_start: nearest_preceding_new_moon(y, m, 1)?,
                in_month: nearest_preceding_new_moon(y, m + 1, 1)?,
            };
            self.anchors.insert(key, computed);
        }
        Ok(self.anchors.get(&key).expect("anchor cached above"))
    }

    /// Convert a solar date to its lunisolar equivalent.
    ///
    /// The governing anchor is the latest cached new moon not after the
    /// date: the in-month new moon, the month-start probe's successor (a
    /// calendar month can contain two new moons), the month-start probe,
    /// and finally the previous-month probe.
    pub fn to_lunisolar(&mut self, date: Date) -> Result<LunisolarDate> {
        let anchors = self.month_anchors(date.year(), date.month())?;
        let governing = [
            anchors.in_month.date,
            anchors.month_start.next_date,
            anchors.month_start.date,
            anchors.prev_month.date,
        ]
        .into_iter()
        .find(|&anchor| anchor <= date)
        .expect("month-start anchor precedes every day of its month");

        Ok(LunisolarDate {
            year: governing.year() as i32,
            month: governing.month(),
            day: (date - governing + 1) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn ymd(c: &mut LunisolarConverter, y: u16, m: u8, d: u8) -> (i32, u8, u8) {
        let k = c.to_lunisolar(date(y, m, d)).unwrap();
        (k.year, k.month, k.day)
    }

    #[test]
    fn day_one_on_new_moon() {
        let mut c = LunisolarConverter::new();
        // 2000-01-06 is the reference new moon.
        assert_eq!(ymd(&mut c, 2000, 1, 6), (2000, 1, 1));
    }

    #[test]
    fn before_the_in_month_new_moon() {
        let mut c = LunisolarConverter::new();
        // The new moon governing early January 2000 fell on 1999-12-07.
        assert_eq!(ymd(&mut c, 2000, 1, 1), (1999, 12, 26));
        assert_eq!(ymd(&mut c, 2000, 1, 31), (2000, 1, 26));
    }

    #[test]
    fn fixture_dates() {
        let mut c = LunisolarConverter::new();
        assert_eq!(ymd(&mut c, 2024, 1, 1), (2023, 12, 21));
        assert_eq!(ymd(&mut c, 2024, 1, 10), (2024, 1, 1));
        assert_eq!(ymd(&mut c, 2024, 12, 31), (2024, 12, 3));
        assert_eq!(ymd(&mut c, 2025, 5, 5), (2025, 4, 9));
        assert_eq!(ymd(&mut c, 2010, 7, 15), (2010, 7, 6));
    }

    #[test]
    fn month_with_two_new_moons() {
        // August 1951 contains new moons on the 2nd and the 31st; both
        // start a (simplified) month 8.
        let mut c = LunisolarConverter::new();
        assert_eq!(ymd(&mut c, 1951, 8, 1), (1951, 7, 30));
        assert_eq!(ymd(&mut c, 1951, 8, 2), (1951, 8, 1));
        assert_eq!(ymd(&mut c, 1951, 8, 30), (1951, 8, 29));
        assert_eq!(ymd(&mut c, 1951, 8, 31), (1951, 8, 1));
    }

    #[test]
    fn month_names() {
        let d = LunisolarDate {
            year: 2024,
            month: 1,
            day: 1,
        };
        assert_eq!(d.month_name(), "睦月");
        let d = LunisolarDate {
            year: 2024,
            month: 12,
            day: 30,
        };
        assert_eq!(d.month_name(), "師走");
    }

    #[test]
    fn probe_out_of_range() {
        let mut c = LunisolarConverter::new();
        // January 1900 needs a probe into December 1899, which is outside
        // the supported date range.
        assert!(c.to_lunisolar(date(1900, 1, 15)).is_err());
    }
}
