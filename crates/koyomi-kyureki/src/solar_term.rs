//! `SolarTerm` — the 24 solar terms (sekki) dividing the solar year.

use koyomi_core::errors::{Error, Result};

/// One of the 24 solar terms, in calendar order from 小寒 (early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolarTerm {
    /// 小寒
    MinorCold,
    /// 大寒
    MajorCold,
    /// 立春
    StartOfSpring,
    /// 雨水
    RainWater,
    /// 啓蟄
    AwakeningOfInsects,
    /// 春分
    SpringEquinox,
    /// 清明
    PureBrightness,
    /// 穀雨
    GrainRain,
    /// 立夏
    StartOfSummer,
    /// 小満
    GrainBuds,
    /// 芒種
    GrainInEar,
    /// 夏至
    SummerSolstice,
    /// 小暑
    MinorHeat,
    /// 大暑
    MajorHeat,
    /// 立秋
    StartOfAutumn,
    /// 処暑
    EndOfHeat,
    /// 白露
    WhiteDew,
    /// 秋分
    AutumnEquinox,
    /// 寒露
    ColdDew,
    /// 霜降
    FrostDescent,
    /// 立冬
    StartOfWinter,
    /// 小雪
    MinorSnow,
    /// 大雪
    MajorSnow,
    /// 冬至
    WinterSolstice,
}

impl SolarTerm {
    /// All 24 terms in calendar order.
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::MinorCold,
        SolarTerm::MajorCold,
        SolarTerm::StartOfSpring,
        SolarTerm::RainWater,
        SolarTerm::AwakeningOfInsects,
        SolarTerm::SpringEquinox,
        SolarTerm::PureBrightness,
        SolarTerm::GrainRain,
        SolarTerm::StartOfSummer,
        SolarTerm::GrainBuds,
        SolarTerm::GrainInEar,
        SolarTerm::SummerSolstice,
        SolarTerm::MinorHeat,
        SolarTerm::MajorHeat,
        SolarTerm::StartOfAutumn,
        SolarTerm::EndOfHeat,
        SolarTerm::WhiteDew,
        SolarTerm::AutumnEquinox,
        SolarTerm::ColdDew,
        SolarTerm::FrostDescent,
        SolarTerm::StartOfWinter,
        SolarTerm::MinorSnow,
        SolarTerm::MajorSnow,
        SolarTerm::WinterSolstice,
    ];

    /// The Japanese name of the term.
    pub fn name(&self) -> &'static str {
        match self {
            SolarTerm::MinorCold => "小寒",
            SolarTerm::MajorCold => "大寒",
            SolarTerm::StartOfSpring => "立春",
            SolarTerm::RainWater => "雨水",
            SolarTerm::AwakeningOfInsects => "啓蟄",
            SolarTerm::SpringEquinox => "春分",
            SolarTerm::PureBrightness => "清明",
            SolarTerm::GrainRain => "穀雨",
            SolarTerm::StartOfSummer => "立夏",
            SolarTerm::GrainBuds => "小満",
            SolarTerm::GrainInEar => "芒種",
            SolarTerm::SummerSolstice => "夏至",
            SolarTerm::MinorHeat => "小暑",
            SolarTerm::MajorHeat => "大暑",
            SolarTerm::StartOfAutumn => "立秋",
            SolarTerm::EndOfHeat => "処暑",
            SolarTerm::WhiteDew => "白露",
            SolarTerm::AutumnEquinox => "秋分",
            SolarTerm::ColdDew => "寒露",
            SolarTerm::FrostDescent => "霜降",
            SolarTerm::StartOfWinter => "立冬",
            SolarTerm::MinorSnow => "小雪",
            SolarTerm::MajorSnow => "大雪",
            SolarTerm::WinterSolstice => "冬至",
        }
    }

    /// Look a term up by its Japanese name.
    ///
    /// # Errors
    /// `Error::UnknownSolarTerm` if `name` is not one of the 24 names.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::UnknownSolarTerm(name.to_string()))
    }

    /// Nominal (month, day) of the term before any yearly correction.
    pub fn base_date(&self) -> (u8, u8) {
        match self {
            SolarTerm::MinorCold => (1, 5),
            SolarTerm::MajorCold => (1, 20),
            SolarTerm::StartOfSpring => (2, 4),
            SolarTerm::RainWater => (2, 19),
            SolarTerm::AwakeningOfInsects => (3, 5),
            SolarTerm::SpringEquinox => (3, 20),
            SolarTerm::PureBrightness => (4, 5),
            SolarTerm::GrainRain => (4, 20),
            SolarTerm::StartOfSummer => (5, 5),
            SolarTerm::GrainBuds => (5, 21),
            SolarTerm::GrainInEar => (6, 6),
            SolarTerm::SummerSolstice => (6, 21),
            SolarTerm::MinorHeat => (7, 7),
            SolarTerm::MajorHeat => (7, 23),
            SolarTerm::StartOfAutumn => (8, 7),
            SolarTerm::EndOfHeat => (8, 23),
            SolarTerm::WhiteDew => (9, 8),
            SolarTerm::AutumnEquinox => (9, 23),
            SolarTerm::ColdDew => (10, 8),
            SolarTerm::FrostDescent => (10, 23),
            SolarTerm::StartOfWinter => (11, 7),
            SolarTerm::MinorSnow => (11, 22),
            SolarTerm::MajorSnow => (12, 7),
            SolarTerm::WinterSolstice => (12, 21),
        }
    }

    /// `true` for the four quarter points (equinoxes and solstices),
    /// whose dates come from linear formulas instead of the base table.
    pub fn is_quarter_point(&self) -> bool {
        matches!(
            self,
            SolarTerm::SpringEquinox
                | SolarTerm::SummerSolstice
                | SolarTerm::AutumnEquinox
                | SolarTerm::WinterSolstice
        )
    }

    /// The quarter point a term is seasonally grouped under, or `None`
    /// for the quarter points themselves.
    ///
    /// This is data carried along from the term table; the yearly date
    /// correction does not consult it.
    pub fn reference_quarter(&self) -> Option<SolarTerm> {
        use SolarTerm::*;
        match self {
            MinorCold | MajorCold | StartOfWinter | MinorSnow | MajorSnow => Some(WinterSolstice),
            StartOfSpring | RainWater | AwakeningOfInsects | PureBrightness | GrainRain => {
                Some(SpringEquinox)
            }
            StartOfSummer | GrainBuds | GrainInEar | MinorHeat | MajorHeat => Some(SummerSolstice),
            StartOfAutumn | EndOfHeat | WhiteDew | ColdDew | FrostDescent => Some(AutumnEquinox),
            SpringEquinox | SummerSolstice | AutumnEquinox | WinterSolstice => None,
        }
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for term in SolarTerm::ALL {
            assert_eq!(SolarTerm::from_name(term.name()).unwrap(), term);
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            SolarTerm::from_name("立派"),
            Err(Error::UnknownSolarTerm("立派".into()))
        );
    }

    #[test]
    fn quarter_points_have_no_reference() {
        for term in SolarTerm::ALL {
            assert_eq!(term.is_quarter_point(), term.reference_quarter().is_none());
        }
    }

    #[test]
    fn base_dates_ordered_over_the_year() {
        let dates: Vec<_> = SolarTerm::ALL.iter().map(|t| t.base_date()).collect();
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{pair:?} out of order");
        }
    }
}
