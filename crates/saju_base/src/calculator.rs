//! The Saju calculator: one pass from a birth moment to a full chart.

use serde::Serialize;
use tracing::debug;

use crate::birth::{BirthInput, Gender};
use crate::config::SajuConfig;
use crate::daewoon::{DaewoonSequence, JeolDistance, daewoon_sequence};
use crate::day_master::{DayMasterTraits, day_master_traits};
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::nobleman::{NoblemanResult, find_nobleman};
use crate::pillars::{ALL_POSITIONS, FourPillars, PillarPosition, PillarSource, SolarTermCalendar};
use crate::samsae::{SamsaeWindow, samsae_window, validate_reference_year};
use crate::shinsal::{ShinsalHit, detect_shinsal};
use crate::social_mask::social_mask_score;
use crate::stem::Stem;
use crate::tally::{ElementBalance, ElementTally, element_tally};
use crate::ten_god::{TenGod, branch_ten_god, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// One pillar with its readings against the day master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarDetail {
    pub position: PillarPosition,
    pub ganji: Ganji,
    /// e.g. "갑자(甲子)".
    pub label: String,
    /// [`TenGod::DayMaster`] for the day stem itself.
    pub stem_ten_god: TenGod,
    pub branch_ten_god: TenGod,
    /// Day master's stage at this pillar's branch.
    pub twelve_stage: TwelveStage,
}

impl PillarDetail {
    pub fn new(position: PillarPosition, ganji: Ganji, day_master: Stem) -> Self {
        let stem_ten_god = match position {
            PillarPosition::Day => TenGod::DayMaster,
            _ => ten_god(day_master, ganji.stem),
        };
        Self {
            position,
            ganji,
            label: ganji.label(),
            stem_ten_god,
            branch_ten_god: branch_ten_god(day_master, ganji.branch),
            twelve_stage: twelve_stage(day_master, ganji.branch),
        }
    }
}

/// Display labels of the four pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarTexts {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

impl From<&FourPillars> for PillarTexts {
    fn from(p: &FourPillars) -> Self {
        Self {
            year: p.year.label(),
            month: p.month.label(),
            day: p.day.label(),
            hour: p.hour.label(),
        }
    }
}

/// Everything derived from one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuResult {
    pub input: BirthInput,
    /// First year of the samsae outlook.
    pub reference_year: i32,
    /// Year that began at the Ipchun before birth.
    pub saju_year: i32,
    pub solar_longitude_deg: f64,
    pub texts: PillarTexts,
    pub pillars: FourPillars,
    pub details: [PillarDetail; 4],
    pub elements: ElementTally,
    pub element_balance: ElementBalance,
    pub day_master: DayMasterTraits,
    pub social_mask_score: u8,
    pub shinsal: Vec<ShinsalHit>,
    pub nobleman: NoblemanResult,
    pub daewoon: DaewoonSequence,
    pub samsae: SamsaeWindow,
}

/// Computes Saju charts with a fixed configuration and pillar source.
#[derive(Debug, Clone)]
pub struct SajuCalculator<S: PillarSource = SolarTermCalendar> {
    config: SajuConfig,
    source: S,
}

impl SajuCalculator<SolarTermCalendar> {
    /// Calculator backed by the solar-term calendar.
    pub fn new(config: SajuConfig) -> Result<Self, SajuError> {
        let source = SolarTermCalendar::new(config.calendar_options());
        Self::with_source(config, source)
    }
}

impl<S: PillarSource> SajuCalculator<S> {
    /// Calculator backed by a custom pillar source.
    pub fn with_source(config: SajuConfig, source: S) -> Result<Self, SajuError> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &SajuConfig {
        &self.config
    }

    /// Four pillars only.
    pub fn pillars(&self, birth: &BirthInput) -> Result<FourPillars, SajuError> {
        let civil = birth.civil_time()?;
        let chart = self.source.sexagenary(&civil)?;
        FourPillars::from_chart(&chart)
    }

    /// Samsae outlook from `reference_year` for the birth year's branch.
    pub fn samsae(
        &self,
        birth: &BirthInput,
        reference_year: i32,
    ) -> Result<SamsaeWindow, SajuError> {
        validate_reference_year(reference_year)?;
        let pillars = self.pillars(birth)?;
        samsae_window(pillars.year.branch, reference_year, self.config.samsae_years)
    }

    /// Full chart. `reference_year` starts the samsae outlook.
    pub fn calculate(
        &self,
        birth: &BirthInput,
        reference_year: i32,
    ) -> Result<SajuResult, SajuError> {
        validate_reference_year(reference_year)?;
        let civil = birth.civil_time()?;
        let chart = self.source.sexagenary(&civil)?;
        let pillars = FourPillars::from_chart(&chart)?;
        let day_master = pillars.day_master();

        let details = ALL_POSITIONS.map(|p| PillarDetail::new(p, pillars.get(p), day_master));
        let elements = element_tally(&pillars);
        let branches = pillars.branches();
        let jeol = JeolDistance {
            days_since: chart.days_since_jeol,
            days_until: chart.days_until_jeol,
        };
        let samsae = samsae_window(pillars.year.branch, reference_year, self.config.samsae_years)?;

        let result = SajuResult {
            input: *birth,
            reference_year,
            saju_year: chart.saju_year,
            solar_longitude_deg: chart.solar_longitude_deg,
            texts: PillarTexts::from(&pillars),
            pillars,
            details,
            element_balance: elements.balance(),
            social_mask_score: social_mask_score(&elements, day_master),
            elements,
            day_master: *day_master_traits(day_master),
            shinsal: detect_shinsal(&branches),
            nobleman: find_nobleman(day_master, &branches),
            daewoon: daewoon_sequence(&pillars, birth.gender, self.config.daewoon_age, jeol),
            samsae,
        };

        debug!(
            birth = %civil,
            year = %pillars.year,
            month = %pillars.month,
            day = %pillars.day,
            hour = %pillars.hour,
            score = result.social_mask_score,
            "saju chart calculated"
        );
        Ok(result)
    }
}

/// Chart with the default configuration (KST, heuristic daewoon age).
///
/// An unknown `hour` is taken as noon.
pub fn calculate(
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
    gender: Gender,
    reference_year: i32,
) -> Result<SajuResult, SajuError> {
    let birth = BirthInput::new(year, month, day, hour, gender);
    SajuCalculator::new(SajuConfig::default())?.calculate(&birth, reference_year)
}
