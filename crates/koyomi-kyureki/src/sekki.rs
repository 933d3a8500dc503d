//! Per-year solar-term lookup.

use std::collections::HashMap;

use crate::astronomy::{solar_term_dates, TermDate};
use crate::solar_term::SolarTerm;
use koyomi_core::errors::Result;
use koyomi_time::Date;

/// A concrete occurrence of a solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SekkiOccurrence {
    /// The date the term falls on.
    pub date: Date,
    /// The term itself.
    pub term: SolarTerm,
}

/// Lazily built per-year solar-term tables.
///
/// Term dates do not change within a process, so each year's table is
/// computed once and kept for the lifetime of the instance.
#[derive(Debug, Default)]
pub struct SekkiLookup {
    tables: HashMap<u16, [TermDate; 24]>,
}

impl SekkiLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&mut self, year: u16) -> &[TermDate; 24] {
        self.tables.entry(year).or_insert_with(|| solar_term_dates(year))
    }

    /// The solar term falling on `date`, if any.
    ///
    /// Most days of a year carry no term; only 24 do.
    pub fn term_for(&mut self, date: Date) -> Option<SolarTerm> {
        let (month, day) = (date.month(), date.day_of_month());
        self.table(date.year())
            .iter()
            .find(|e| e.month == month && e.day == day)
            .map(|e| e.term)
    }

    /// The soonest occurrence of the named term on or after `from`.
    ///
    /// The reference year's table is consulted first; if the term's date
    /// has already passed, next year's occurrence is returned.
    ///
    /// # Errors
    /// `Error::UnknownSolarTerm` if `name` is not a recognized term name;
    /// `Error::Date` if the occurrence falls outside the supported range.
    pub fn next_occurrence(&mut self, from: Date, name: &str) -> Result<SekkiOccurrence> {
        let term = SolarTerm::from_name(name)?;
        let year = from.year();

        let entry = |table: &[TermDate; 24]| {
            *table
                .iter()
                .find(|e| e.term == term)
                .expect("every term appears in its year table")
        };

        let this_year = entry(self.table(year));
        let date = Date::from_ymd(year, this_year.month, this_year.day)?;
        if date >= from {
            return Ok(SekkiOccurrence { date, term });
        }

        let next_year = entry(self.table(year + 1));
        Ok(SekkiOccurrence {
            date: Date::from_ymd(year + 1, next_year.month, next_year.day)?,
            term,
        })
    }
}
