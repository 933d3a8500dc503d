//! `CalendarDayInfo` aggregate record and the `Koyomi` façade.

use std::collections::BTreeMap;

use crate::era::{era_for, EraYear};
use crate::holiday::HolidayResolver;
use crate::lunisolar::{LunisolarConverter, LunisolarDate};
use crate::rokuyo::Rokuyo;
use crate::sekki::SekkiLookup;
use crate::solar_term::SolarTerm;
use crate::special_day::{special_days, Branch, SpecialDays, Stem};
use koyomi_core::{ensure, errors::Result};
use koyomi_time::{date::days_in_month, Date, Weekday};

/// Japanese weekday characters, indexed by `Weekday` ordinal − 1.
const WEEKDAY_KANJI: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// The full set of traditional-calendar annotations for one solar date.
///
/// This is the engine's sole externally consumed output; one instance per
/// date, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarDayInfo {
    /// Weekday of the date.
    pub weekday: Weekday,
    /// Japanese weekday character (日, 月, …).
    pub weekday_name: &'static str,
    /// Lunisolar (kyūreki) date.
    pub lunisolar: LunisolarDate,
    /// Traditional name of the lunisolar month (睦月 … 師走).
    pub month_name: &'static str,
    /// Era and era-relative year of the solar year.
    pub era: EraYear,
    /// Sexagenary stem of the day.
    pub stem: Stem,
    /// Sexagenary branch of the day.
    pub branch: Branch,
    /// Zodiac branch (eto) of the solar year.
    pub eto: Branch,
    /// Solar term falling on the date, if any.
    pub solar_term: Option<SolarTerm>,
    /// Rokuyō label of the date.
    pub rokuyo: Rokuyo,
    /// Holiday name, or `None` on a regular day.
    pub holiday: Option<&'static str>,
    /// Auspicious-day flags.
    pub special: SpecialDays,
}

/// The calendar engine: composes the converter, the solar-term lookup,
/// and the holiday resolver, and owns their caches.
///
/// All caches are append-only maps scoped to this instance; there is no
/// interior mutability, so a shared instance must be serialized by the
/// caller (or use one instance per thread).
#[derive(Debug, Default)]
pub struct Koyomi {
    lunisolar: LunisolarConverter,
    sekki: SekkiLookup,
    holidays: HolidayResolver,
}

impl Koyomi {
    /// Create an engine with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the full annotation record for one date.
    pub fn info_for(&mut self, date: Date) -> Result<CalendarDayInfo> {
        let lunisolar = self.lunisolar.to_lunisolar(date)?;
        let weekday = date.weekday();

        Ok(CalendarDayInfo {
            weekday,
            weekday_name: WEEKDAY_KANJI[weekday.ordinal() as usize - 1],
            lunisolar,
            month_name: lunisolar.month_name(),
            era: era_for(date.year() as i32),
            stem: Stem::of_day(date),
            branch: Branch::of_day(date),
            eto: Branch::of_year(date.year() as i32),
            solar_term: self.sekki.term_for(date),
            rokuyo: Rokuyo::of(lunisolar),
            holiday: self.holidays.holiday_for(date),
            special: special_days(date, lunisolar),
        })
    }

    /// Annotation records for every day of a month, in day order.
    pub fn month_info(&mut self, year: u16, month: u8) -> Result<Vec<CalendarDayInfo>> {
        ensure!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let days = days_in_month(year, month);
        let mut infos = Vec::with_capacity(days as usize);
        for day in 1..=days {
            infos.push(self.info_for(Date::from_ymd(year, month, day)?)?);
        }
        Ok(infos)
    }

    /// Annotation records for every day of a year, keyed by month.
    pub fn year_info(&mut self, year: u16) -> Result<BTreeMap<u8, Vec<CalendarDayInfo>>> {
        let mut months = BTreeMap::new();
        for month in 1..=12 {
            months.insert(month, self.month_info(year, month)?);
        }
        Ok(months)
    }

    /// Day-of-month numbers within a month whose Rokuyō matches `rokuyo`.
    pub fn find_rokuyo_days(&mut self, year: u16, month: u8, rokuyo: Rokuyo) -> Result<Vec<u8>> {
        Ok(self
            .month_info(year, month)?
            .iter()
            .enumerate()
            .filter(|(_, info)| info.rokuyo == rokuyo)
            .map(|(idx, _)| idx as u8 + 1)
            .collect())
    }

    /// The Rokuyō of a single date, without assembling a full record.
    pub fn rokuyo_for(&mut self, date: Date) -> Result<Rokuyo> {
        Ok(Rokuyo::of(self.lunisolar.to_lunisolar(date)?))
    }

    /// The solar-term lookup, for direct term queries.
    pub fn sekki(&mut self) -> &mut SekkiLookup {
        &mut self.sekki
    }

    /// The lunisolar converter, for direct anchor/date queries.
    pub fn converter(&mut self) -> &mut LunisolarConverter {
        &mut self.lunisolar
    }
}
