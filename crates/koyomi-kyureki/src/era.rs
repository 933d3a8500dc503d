//! Era (gengō) table and resolution.

/// A Japanese era from 1868 onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Era {
    /// 明治 (1868–1911)
    Meiji,
    /// 大正 (1912–1925)
    Taisho,
    /// 昭和 (1926–1988)
    Showa,
    /// 平成 (1989–2018)
    Heisei,
    /// 令和 (2019–)
    Reiwa,
}

impl Era {
    /// The Japanese name of the era.
    pub fn name(&self) -> &'static str {
        match self {
            Era::Meiji => "明治",
            Era::Taisho => "大正",
            Era::Showa => "昭和",
            Era::Heisei => "平成",
            Era::Reiwa => "令和",
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An era together with the era-relative (wareki) year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EraYear {
    /// The era.
    pub era: Era,
    /// Year within the era, 1-based. Signed because out-of-table years
    /// resolve against the last era and can produce values ≤ 0.
    pub year: i32,
}

impl EraYear {
    /// The Japanese name of the era.
    pub fn name(&self) -> &'static str {
        self.era.name()
    }
}

/// Era boundaries, ordered and non-overlapping. Eras are resolved at
/// year granularity; the accession date within the boundary year is not
/// modeled. The last entry's end year is a synthetic upper bound only.
const ERAS: [(Era, i32, i32); 5] = [
    (Era::Meiji, 1868, 1911),
    (Era::Taisho, 1912, 1925),
    (Era::Showa, 1926, 1988),
    (Era::Heisei, 1989, 2018),
    (Era::Reiwa, 2019, 2100),
];

/// Resolve the era and era-relative year for a calendar year.
///
/// Total: years outside the table (before 1868 or past the synthetic
/// bound) fall back to the last era, still counting from its start year –
/// the result can be absurd for very old dates, by design of the source
/// material.
pub fn era_for(year: i32) -> EraYear {
    for &(era, start, end) in &ERAS {
        if (start..=end).contains(&year) {
            return EraYear {
                era,
                year: year - start + 1,
            };
        }
    }
    let &(era, start, _) = ERAS.last().expect("era table is non-empty");
    EraYear {
        era,
        year: year - start + 1,
    }
}
