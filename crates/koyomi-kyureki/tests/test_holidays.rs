//! Holiday resolution checked against full expected years, plus era
//! resolution over the whole table range.

use koyomi_kyureki::{era_for, Era, HolidayResolver};
use koyomi_time::date::days_in_month;
use koyomi_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that `expected` is exactly the set of holidays the resolver
/// finds in `year`, names included.
fn check_holidays(year: u16, expected: &[(u8, u8, &str)]) {
    let mut resolver = HolidayResolver::new();
    for month in 1..=12u8 {
        for day in 1..=days_in_month(year, month) {
            let found = resolver.holiday_for(date(year, month, day));
            let want = expected
                .iter()
                .find(|&&(m, d, _)| m == month && d == day)
                .map(|&(_, _, name)| name);
            assert_eq!(
                found, want,
                "{year}-{month:02}-{day:02}: got {found:?}, expected {want:?}"
            );
        }
    }
}

#[test]
fn holidays_2024() {
    check_holidays(
        2024,
        &[
            (1, 1, "元日"),
            (1, 8, "成人の日"),
            (2, 11, "建国記念の日"),
            (2, 23, "天皇誕生日"),
            (3, 20, "春分の日"),
            (4, 29, "昭和の日"),
            (5, 3, "憲法記念日"),
            (5, 4, "みどりの日"),
            (5, 5, "こどもの日"),
            (7, 15, "海の日"),
            (8, 11, "山の日"),
            (9, 16, "敬老の日"),
            (9, 22, "秋分の日"),
            (10, 14, "スポーツの日"),
            (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"),
        ],
    );
}

#[test]
fn holidays_2025() {
    check_holidays(
        2025,
        &[
            (1, 1, "元日"),
            (1, 13, "成人の日"),
            (2, 11, "建国記念の日"),
            (2, 23, "天皇誕生日"),
            (3, 20, "春分の日"),
            (4, 29, "昭和の日"),
            (5, 3, "憲法記念日"),
            (5, 4, "みどりの日"),
            (5, 5, "こどもの日"),
            (7, 21, "海の日"),
            (8, 11, "山の日"),
            (9, 15, "敬老の日"),
            (9, 23, "秋分の日"),
            (10, 13, "スポーツの日"),
            (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"),
        ],
    );
}

#[test]
fn sunday_holiday_followed_by_named_monday() {
    // 2025: みどりの日 falls on Sunday May 4 and the Monday after it is
    // itself a fixed holiday, so the long weekend stays fully named.
    let mut resolver = HolidayResolver::new();
    assert_eq!(
        date(2025, 5, 4).weekday(),
        koyomi_time::Weekday::Sunday
    );
    assert_eq!(resolver.holiday_for(date(2025, 5, 4)), Some("みどりの日"));
    assert_eq!(resolver.holiday_for(date(2025, 5, 5)), Some("こどもの日"));
}

#[test]
fn era_resolution_is_total_and_ordered() {
    let mut previous = era_for(1867);
    for year in 1868..=2100 {
        let current = era_for(year);
        assert!(current.year >= 1, "{year}: era year {}", current.year);
        if current.era == previous.era {
            assert_eq!(current.year, previous.year + 1, "{year}: era year step");
        } else {
            assert_eq!(current.year, 1, "{year}: new era must start at 1");
        }
        previous = current;
    }
    // Exactly four era transitions occur in 1869..=2100.
    let transitions = (1869..=2100)
        .filter(|&y| era_for(y).era != era_for(y - 1).era)
        .count();
    assert_eq!(transitions, 4);
}

#[test]
fn era_fixture_years() {
    assert_eq!(era_for(2024).era, Era::Reiwa);
    assert_eq!(era_for(2024).year, 6);
    assert_eq!(era_for(1990).era, Era::Heisei);
    assert_eq!(era_for(1990).year, 2);
    assert_eq!(era_for(1950).era, Era::Showa);
    assert_eq!(era_for(1950).year, 25);
}
