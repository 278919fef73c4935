//! The four pillars (사주) and the calendar seam that produces them.
//!
//! Stem/branch indices arrive from a [`PillarSource`]; they are validated
//! here, once, before any table lookup.

use serde::Serialize;

use saju_time::{CalendarOptions, CivilTime, SexagenaryChart, sexagenary_chart};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::stem::Stem;

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Korean name (년주, 월주, 일주, 시주).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Year, Month, Day and Hour pillars. The Day stem is the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Ganji,
    pub month: Ganji,
    pub day: Ganji,
    pub hour: Ganji,
}

impl FourPillars {
    /// Validate and wrap the raw indices of a sexagenary chart.
    pub fn from_chart(chart: &SexagenaryChart) -> Result<Self, SajuError> {
        Ok(Self {
            year: Ganji::try_from(chart.year)?,
            month: Ganji::try_from(chart.month)?,
            day: Ganji::try_from(chart.day)?,
            hour: Ganji::try_from(chart.hour)?,
        })
    }

    /// The day master (일간).
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub const fn get(&self, position: PillarPosition) -> Ganji {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in chart order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Ganji)> + '_ {
        ALL_POSITIONS.iter().map(move |&p| (p, self.get(p)))
    }

    pub const fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

/// Converts a civil birth moment into sexagenary indices.
///
/// The calculator never derives pillars itself; it asks a source.
pub trait PillarSource {
    fn sexagenary(&self, civil: &CivilTime) -> Result<SexagenaryChart, SajuError>;
}

/// Solar-term calendar from `saju_time`: Ipchun year boundary, jeol months.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarTermCalendar {
    options: CalendarOptions,
}

impl SolarTermCalendar {
    pub fn new(options: CalendarOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }
}

impl PillarSource for SolarTermCalendar {
    fn sexagenary(&self, civil: &CivilTime) -> Result<SexagenaryChart, SajuError> {
        Ok(sexagenary_chart(civil, &self.options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::RawPillar;

    fn chart(year: RawPillar, day: RawPillar) -> SexagenaryChart {
        SexagenaryChart {
            year,
            month: RawPillar { stem: 2, branch: 2 },
            day,
            hour: RawPillar { stem: 0, branch: 0 },
            saju_year: 2024,
            solar_longitude_deg: 320.0,
            jd_ut: 2_460_350.0,
            days_since_jeol: 5.0,
            days_until_jeol: 25.0,
        }
    }

    #[test]
    fn from_chart_validates_indices() {
        let bad = chart(RawPillar { stem: 0, branch: 4 }, RawPillar { stem: 11, branch: 1 });
        assert_eq!(
            FourPillars::from_chart(&bad),
            Err(SajuError::InvalidStemIndex(11))
        );
        let bad_branch = chart(RawPillar { stem: 0, branch: 14 }, RawPillar { stem: 1, branch: 1 });
        assert_eq!(
            FourPillars::from_chart(&bad_branch),
            Err(SajuError::InvalidBranchIndex(14))
        );
    }

    #[test]
    fn day_master_and_order() {
        let ok = chart(RawPillar { stem: 0, branch: 4 }, RawPillar { stem: 7, branch: 9 });
        let p = FourPillars::from_chart(&ok).unwrap();
        assert_eq!(p.day_master(), Stem::Sin);
        let positions: Vec<_> = p.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, ALL_POSITIONS.to_vec());
        assert_eq!(p.branches()[0], Branch::Jin);
        assert_eq!(p.stems()[2], Stem::Sin);
    }

    #[test]
    fn solar_term_source_delegates() {
        let source = SolarTermCalendar::default();
        let civil = CivilTime::new(1990, 1, 1, 12, 0).unwrap();
        let chart = source.sexagenary(&civil).unwrap();
        let p = FourPillars::from_chart(&chart).unwrap();
        assert_eq!(p.year.hanja(), "己巳");
        assert_eq!(p.month.hanja(), "丙子");
        assert_eq!(p.day.hanja(), "丙寅");
        assert_eq!(p.hour.hanja(), "甲午");
    }
}
