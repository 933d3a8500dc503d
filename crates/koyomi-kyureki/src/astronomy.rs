//! New-moon approximation and solar-term date formulas.
//!
//! Both computations are deliberately coarse: the new moon is
//! reconstructed from a fixed mean synodic month against a single
//! reference new moon, and the solar-term dates come from linear
//! approximations. This keeps the engine free of ephemeris data while
//! staying within a day of the astronomical values for the supported
//! range.

use crate::solar_term::SolarTerm;
use koyomi_core::errors::Result;
use koyomi_core::JulianDate;
use koyomi_time::Date;

/// Mean synodic month – the period between successive new moons, in days.
pub const SYNODIC_MONTH: f64 = 29.53059;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: JulianDate = 2_451_545.0;

/// Serial number of the reference new moon, 2000-01-06 (local midnight).
const BASE_NEW_MOON_SERIAL: i32 = 36_530;

/// An approximated lunar-cycle boundary.
///
/// Produced by [`nearest_preceding_new_moon`]; `date <= query < next_date`
/// always holds for the query the event was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewMoonEvent {
    /// Approximate Julian Date of the new-moon instant.
    pub julian_date: JulianDate,
    /// Civil date containing the new-moon instant.
    pub date: Date,
    /// Civil date containing the following new-moon instant.
    pub next_date: Date,
}

/// Civil date of the new moon `cycles` synodic months after the reference.
fn cycle_date(cycles: f64) -> Result<Date> {
    Date::from_serial(BASE_NEW_MOON_SERIAL + (cycles * SYNODIC_MONTH).floor() as i32)
}

/// Compute the new moon nearest preceding the given calendar date.
///
/// `month` and `day` may overflow their ranges; they are normalized by
/// rolling into the adjacent month/year (the lunisolar converter probes
/// "the 28th of the previous month" and "the 1st of the next month"
/// without pre-normalizing).
///
/// The number of whole synodic cycles elapsed since the reference new
/// moon determines the preceding instant; the following new moon is one
/// cycle later. Because the instant is floored to a civil date, the raw
/// cycle count can leave the *following* new moon on the queried date
/// itself; the event is then advanced one cycle so that
/// `date <= query < next_date` holds in civil dates, which also puts
/// lunisolar day 1 on the new-moon date.
pub fn nearest_preceding_new_moon(year: i32, month: i32, day: i32) -> Result<NewMoonEvent> {
    let target = Date::from_ymd_rolled(year, month, day)?;

    let elapsed = (target.serial() - BASE_NEW_MOON_SERIAL) as f64;
    let mut cycles = (elapsed / SYNODIC_MONTH).floor();
    if cycle_date(cycles + 1.0)? <= target {
        cycles += 1.0;
    }

    // The reference new moon falls 4.5 days after the J2000.0 epoch instant.
    let julian_date = J2000_JD + 4.5 + cycles * SYNODIC_MONTH;

    Ok(NewMoonEvent {
        julian_date,
        date: cycle_date(cycles)?,
        next_date: cycle_date(cycles + 1.0)?,
    })
}

// ── Solar terms ───────────────────────────────────────────────────────────────

/// The date of one solar term within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermDate {
    /// The solar term.
    pub term: SolarTerm,
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
}

/// Day-of-month of a quarter point from its linear approximation.
fn quarter_day(year: u16, base: f64) -> u8 {
    let y = year as f64;
    (base + 0.242194 * (y - 1980.0) - ((y - 1980.0) / 4.0).floor()).floor() as u8
}

/// Approximate day-of-month of the spring equinox (March).
pub fn spring_equinox_day(year: u16) -> u8 {
    quarter_day(year, 20.8431)
}

/// Approximate day-of-month of the summer solstice (June).
pub fn summer_solstice_day(year: u16) -> u8 {
    quarter_day(year, 21.851)
}

/// Approximate day-of-month of the autumnal equinox (September).
pub fn autumnal_equinox_day(year: u16) -> u8 {
    quarter_day(year, 23.2488)
}

/// Approximate day-of-month of the winter solstice (December).
pub fn winter_solstice_day(year: u16) -> u8 {
    quarter_day(year, 22.6224)
}

/// Compute the dates of all 24 solar terms for a year.
///
/// The four quarter points (equinoxes and solstices) use their linear
/// approximations; the remaining 20 terms take their nominal base date
/// plus a uniform leap-year/century correction. The correction is not
/// derived from each term's reference quarter point – a known weakness of
/// the approximation, preserved for output compatibility.
pub fn solar_term_dates(year: u16) -> [TermDate; 24] {
    let correction = (year % 4 == 0) as i32 + ((year as f64 - 2000.0) / 100.0).floor() as i32
        - ((year as f64 - 2000.0) / 400.0).floor() as i32;

    SolarTerm::ALL.map(|term| {
        let (month, base_day) = term.base_date();
        let day = match term {
            SolarTerm::SpringEquinox => spring_equinox_day(year),
            SolarTerm::SummerSolstice => summer_solstice_day(year),
            SolarTerm::AutumnEquinox => autumnal_equinox_day(year),
            SolarTerm::WinterSolstice => winter_solstice_day(year),
            _ => (base_day as i32 + correction) as u8,
        };
        TermDate { term, month, day }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn base_serial_matches_reference_date() {
        let base = Date::from_ymd(2000, 1, 6).unwrap();
        assert_eq!(base.serial(), BASE_NEW_MOON_SERIAL);
    }

    #[test]
    fn reference_new_moon() {
        // 2000-01-06 is the reference new moon itself; its Julian Date is
        // that of the civil midnight, 2451549.5.
        let ev = nearest_preceding_new_moon(2000, 1, 6).unwrap();
        assert_eq!(ev.date, Date::from_ymd(2000, 1, 6).unwrap());
        assert_eq!(ev.next_date, Date::from_ymd(2000, 2, 4).unwrap());
        assert_abs_diff_eq!(ev.julian_date, 2_451_549.5, epsilon = 1e-9);
    }

    #[test]
    fn preceding_cycle_before_reference() {
        let ev = nearest_preceding_new_moon(2000, 1, 1).unwrap();
        assert_eq!(ev.date, Date::from_ymd(1999, 12, 7).unwrap());
        assert_eq!(ev.next_date, Date::from_ymd(2000, 1, 6).unwrap());
        assert_abs_diff_eq!(ev.julian_date, 2_451_519.96941, epsilon = 1e-5);
    }

    #[test]
    fn query_on_next_new_moon_advances() {
        // 2000-02-04 is itself a new-moon date; the event must govern it
        // rather than leaving it as the previous cycle's next_date.
        let ev = nearest_preceding_new_moon(2000, 2, 4).unwrap();
        assert_eq!(ev.date, Date::from_ymd(2000, 2, 4).unwrap());
        assert_eq!(ev.next_date, Date::from_ymd(2000, 3, 5).unwrap());
    }

    #[test]
    fn overflowing_probe_components_roll() {
        // month 0 → December of the previous year; month 13 → next January.
        let a = nearest_preceding_new_moon(2024, 0, 28).unwrap();
        let b = nearest_preceding_new_moon(2023, 12, 28).unwrap();
        assert_eq!(a, b);
        let a = nearest_preceding_new_moon(2023, 13, 1).unwrap();
        let b = nearest_preceding_new_moon(2024, 1, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equinox_days() {
        assert_eq!(spring_equinox_day(2024), 20);
        assert_eq!(autumnal_equinox_day(2024), 22);
        assert_eq!(spring_equinox_day(2025), 20);
        assert_eq!(autumnal_equinox_day(2025), 23);
        assert_eq!(spring_equinox_day(1980), 20);
        assert_eq!(autumnal_equinox_day(1980), 23);
    }

    #[test]
    fn term_table_2025() {
        // 2025 is not a leap year and gets no century correction, so the
        // non-quarter terms sit on their base dates.
        let table = solar_term_dates(2025);
        let find = |t: SolarTerm| {
            let e = table.iter().find(|e| e.term == t).unwrap();
            (e.month, e.day)
        };
        assert_eq!(find(SolarTerm::MinorCold), (1, 5));
        assert_eq!(find(SolarTerm::StartOfSpring), (2, 4));
        assert_eq!(find(SolarTerm::SpringEquinox), (3, 20));
        assert_eq!(find(SolarTerm::SummerSolstice), (6, 21));
        assert_eq!(find(SolarTerm::AutumnEquinox), (9, 23));
        assert_eq!(find(SolarTerm::WinterSolstice), (12, 22));
    }

    #[test]
    fn term_table_leap_year_correction() {
        // 2024 is a leap year: non-quarter terms shift one day later.
        let table = solar_term_dates(2024);
        let find = |t: SolarTerm| {
            let e = table.iter().find(|e| e.term == t).unwrap();
            (e.month, e.day)
        };
        assert_eq!(find(SolarTerm::MinorCold), (1, 6));
        assert_eq!(find(SolarTerm::MajorSnow), (12, 8));
        // Quarter points are unaffected by the table correction.
        assert_eq!(find(SolarTerm::SpringEquinox), (3, 20));
        assert_eq!(find(SolarTerm::AutumnEquinox), (9, 22));
    }

    #[test]
    fn term_dates_distinct_within_year() {
        for year in [1980, 2000, 2024, 2025, 2100] {
            let table = solar_term_dates(year);
            let mut seen = std::collections::HashSet::new();
            for e in table {
                assert!(
                    seen.insert((e.month, e.day)),
                    "{year}: duplicate term date {}-{}",
                    e.month,
                    e.day
                );
            }
        }
    }
}
