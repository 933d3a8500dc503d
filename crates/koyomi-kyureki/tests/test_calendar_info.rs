//! End-to-end checks of the aggregate record: idempotence, solar-term
//! coverage over full years, and month/year enumeration shapes.

use koyomi_kyureki::Koyomi;
use koyomi_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn info_is_idempotent() {
    let mut koyomi = Koyomi::new();
    for (y, m, d) in [(2024, 1, 1), (2024, 3, 20), (2025, 5, 5), (2010, 7, 15)] {
        let first = koyomi.info_for(date(y, m, d)).unwrap();
        let second = koyomi.info_for(date(y, m, d)).unwrap();
        assert_eq!(first, second, "{y}-{m:02}-{d:02}");
    }
}

#[test]
fn fresh_engine_agrees_with_warm_caches() {
    let mut warm = Koyomi::new();
    // Warm every cache for the year.
    let _ = warm.year_info(2024).unwrap();

    let mut cold = Koyomi::new();
    for (y, m, d) in [(2024, 1, 1), (2024, 6, 15), (2024, 12, 31)] {
        assert_eq!(
            warm.info_for(date(y, m, d)).unwrap(),
            cold.info_for(date(y, m, d)).unwrap(),
            "{y}-{m:02}-{d:02}"
        );
    }
}

#[test]
fn exactly_24_solar_term_days_per_year() {
    let mut koyomi = Koyomi::new();
    for year in [2000u16, 2024, 2025] {
        let months = koyomi.year_info(year).unwrap();
        let term_days: usize = months
            .values()
            .flatten()
            .filter(|info| info.solar_term.is_some())
            .count();
        assert_eq!(term_days, 24, "year {year}");
    }
}

#[test]
fn year_info_covers_all_months() {
    let mut koyomi = Koyomi::new();
    let months = koyomi.year_info(2024).unwrap();
    assert_eq!(months.len(), 12);
    let total_days: usize = months.values().map(Vec::len).sum();
    assert_eq!(total_days, 366); // 2024 is a leap year
    assert_eq!(months[&2].len(), 29);
}

#[test]
fn every_day_carries_consistent_labels() {
    let mut koyomi = Koyomi::new();
    for info in koyomi.month_info(2024, 9).unwrap() {
        // The stored names must match what the typed fields produce.
        assert_eq!(info.month_name, info.lunisolar.month_name());
        assert_eq!(info.era.name(), "令和");
        assert!((1..=30).contains(&info.lunisolar.day));
    }
}

#[test]
fn next_sekki_through_the_engine() {
    let mut koyomi = Koyomi::new();
    let occurrence = koyomi
        .sekki()
        .next_occurrence(date(2024, 12, 25), "冬至")
        .unwrap();
    // 冬至 2024 falls on Dec 22, already past: next year's is returned.
    assert_eq!(occurrence.date, date(2025, 12, 22));
}
