//! Daewoon (대운, 大運): ten-year luck cycles stepped from the month pillar.
//!
//! Direction is forward for a yang-year male or a yin-year female, backward
//! otherwise. Each cycle moves stem and branch one step from the previous
//! one; nine cycles are generated.
//!
//! Starting age:
//! - `Heuristic`: `(year_stem + month_branch) mod 10 + 1`.
//! - `SolarTerm`: days to the next jeol (forward) or since the previous jeol
//!   (backward), three days per year, rounded, at least 1.

use serde::{Deserialize, Serialize};

use crate::birth::Gender;
use crate::element::Polarity;
use crate::ganji::Ganji;
use crate::pillars::FourPillars;
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Number of cycles generated.
pub const DAEWOON_COUNT: usize = 9;

/// Years per cycle.
pub const DAEWOON_SPAN_YEARS: u32 = 10;

/// Days of solar-term distance per year of starting age.
pub const DAYS_PER_START_YEAR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DaewoonDirection {
    Forward,
    Backward,
}

impl DaewoonDirection {
    /// 순행 for a yang-year male or yin-year female, 역행 otherwise.
    pub fn for_birth(year_stem: Stem, gender: Gender) -> Self {
        match (gender, year_stem.polarity()) {
            (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Self::Forward,
            _ => Self::Backward,
        }
    }

    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }
}

/// How the first cycle's starting age is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaewoonAgeMethod {
    #[default]
    Heuristic,
    SolarTerm,
}

/// Distance from birth to the surrounding jeol terms, in days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JeolDistance {
    pub days_since: f64,
    pub days_until: f64,
}

/// One ten-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Daewoon {
    /// 1-based position in the sequence.
    pub order: u8,
    pub ganji: Ganji,
    pub start_age: u32,
    /// Ten god of the cycle stem against the day master.
    pub ten_god: TenGod,
    /// Day master's stage at the cycle branch.
    pub twelve_stage: TwelveStage,
}

/// The full daewoon sequence of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaewoonSequence {
    pub direction: DaewoonDirection,
    pub method: DaewoonAgeMethod,
    pub start_age: u32,
    pub cycles: Vec<Daewoon>,
}

impl DaewoonSequence {
    /// Cycle covering a given age (`None` before the first cycle or after the last).
    pub fn active_at(&self, age: u32) -> Option<&Daewoon> {
        self.cycles
            .iter()
            .rev()
            .find(|c| c.start_age <= age)
            .filter(|c| age < c.start_age + DAEWOON_SPAN_YEARS)
    }
}

/// Starting age of the first cycle.
pub fn daewoon_start_age(
    pillars: &FourPillars,
    direction: DaewoonDirection,
    method: DaewoonAgeMethod,
    jeol: JeolDistance,
) -> u32 {
    match method {
        DaewoonAgeMethod::Heuristic => {
            let sum = pillars.year.stem.index() as u32 + pillars.month.branch.index() as u32;
            sum % 10 + 1
        }
        DaewoonAgeMethod::SolarTerm => {
            let days = match direction {
                DaewoonDirection::Forward => jeol.days_until,
                DaewoonDirection::Backward => jeol.days_since,
            };
            ((days / DAYS_PER_START_YEAR).round() as u32).max(1)
        }
    }
}

/// Generate the nine daewoon cycles.
pub fn daewoon_sequence(
    pillars: &FourPillars,
    gender: Gender,
    method: DaewoonAgeMethod,
    jeol: JeolDistance,
) -> DaewoonSequence {
    let direction = DaewoonDirection::for_birth(pillars.year.stem, gender);
    let start_age = daewoon_start_age(pillars, direction, method, jeol);
    let day_master = pillars.day_master();

    let cycles = (0..DAEWOON_COUNT)
        .map(|i| {
            let ganji = pillars.month.offset(direction.step() * (i as i32 + 1));
            Daewoon {
                order: i as u8 + 1,
                ganji,
                start_age: start_age + DAEWOON_SPAN_YEARS * i as u32,
                ten_god: ten_god(day_master, ganji.stem),
                twelve_stage: twelve_stage(day_master, ganji.branch),
            }
        })
        .collect();

    DaewoonSequence {
        direction,
        method,
        start_age,
        cycles,
    }
}
