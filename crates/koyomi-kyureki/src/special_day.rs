//! Sexagenary stems/branches and auspicious-day flags.
//!
//! Day indices count from the 1900-01-01 epoch: the stem cycles every 10
//! days, the branch every 12. The three auspicious-day flags are
//! simplified heuristics, not the authentic multi-factor traditional
//! rules.

use crate::lunisolar::LunisolarDate;
use koyomi_time::{Date, Weekday};

/// One of the ten heavenly stems (十干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stem {
    /// 甲
    Kinoe,
    /// 乙
    Kinoto,
    /// 丙
    Hinoe,
    /// 丁
    Hinoto,
    /// 戊
    Tsuchinoe,
    /// 己
    Tsuchinoto,
    /// 庚
    Kanoe,
    /// 辛
    Kanoto,
    /// 壬
    Mizunoe,
    /// 癸
    Mizunoto,
}

impl Stem {
    /// The ten stems in cycle order.
    pub const ALL: [Stem; 10] = [
        Stem::Kinoe,
        Stem::Kinoto,
        Stem::Hinoe,
        Stem::Hinoto,
        Stem::Tsuchinoe,
        Stem::Tsuchinoto,
        Stem::Kanoe,
        Stem::Kanoto,
        Stem::Mizunoe,
        Stem::Mizunoto,
    ];

    /// The stem of a day.
    pub fn of_day(date: Date) -> Self {
        Self::ALL[date.days_since_1900().rem_euclid(10) as usize]
    }

    /// The Japanese character of the stem.
    pub fn name(&self) -> &'static str {
        match self {
            Stem::Kinoe => "甲",
            Stem::Kinoto => "乙",
            Stem::Hinoe => "丙",
            Stem::Hinoto => "丁",
            Stem::Tsuchinoe => "戊",
            Stem::Tsuchinoto => "己",
            Stem::Kanoe => "庚",
            Stem::Kanoto => "辛",
            Stem::Mizunoe => "壬",
            Stem::Mizunoto => "癸",
        }
    }
}

/// One of the twelve earthly branches (十二支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Branch {
    /// 子
    Ne,
    /// 丑
    Ushi,
    /// 寅
    Tora,
    /// 卯
    U,
    /// 辰
    Tatsu,
    /// 巳
    Mi,
    /// 午
    Uma,
    /// 未
    Hitsuji,
    /// 申
    Saru,
    /// 酉
    Tori,
    /// 戌
    Inu,
    /// 亥
    I,
}

impl Branch {
    /// The twelve branches in cycle order.
    pub const ALL: [Branch; 12] = [
        Branch::Ne,
        Branch::Ushi,
        Branch::Tora,
        Branch::U,
        Branch::Tatsu,
        Branch::Mi,
        Branch::Uma,
        Branch::Hitsuji,
        Branch::Saru,
        Branch::Tori,
        Branch::Inu,
        Branch::I,
    ];

    /// The branch of a day (12-day cycle from the 1900 epoch).
    pub fn of_day(date: Date) -> Self {
        Self::ALL[date.days_since_1900().rem_euclid(12) as usize]
    }

    /// The zodiac branch (eto) of a calendar year: `(year − 4) mod 12`.
    pub fn of_year(year: i32) -> Self {
        Self::ALL[(year - 4).rem_euclid(12) as usize]
    }

    /// The Japanese character of the branch.
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Ne => "子",
            Branch::Ushi => "丑",
            Branch::Tora => "寅",
            Branch::U => "卯",
            Branch::Tatsu => "辰",
            Branch::Mi => "巳",
            Branch::Uma => "午",
            Branch::Hitsuji => "未",
            Branch::Saru => "申",
            Branch::Tori => "酉",
            Branch::Inu => "戌",
            Branch::I => "亥",
        }
    }
}

/// Auspicious-day flags derived for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecialDays {
    /// 一粒万倍日 – day stem is 甲 or 己.
    pub hitotsubu_manbai: bool,
    /// 天赦日 – day stem is 辛 in a lunisolar month whose 12-cycle index
    /// is 1, 5, or 9.
    pub tensha: bool,
    /// 大明日 – the weekday is Sunday or Thursday.
    pub daimyo: bool,
}

/// Derive the auspicious-day flags for a date and its lunisolar
/// counterpart.
pub fn special_days(date: Date, lunisolar: LunisolarDate) -> SpecialDays {
    let stem = Stem::of_day(date);
    SpecialDays {
        hitotsubu_manbai: matches!(stem, Stem::Kinoe | Stem::Tsuchinoto),
        tensha: stem == Stem::Kanoto && matches!(lunisolar.month % 12, 1 | 5 | 9),
        daimyo: matches!(date.weekday(), Weekday::Sunday | Weekday::Thursday),
    }
}
