//! Four Pillars (사주, 四柱) chart calculations.
//!
//! This crate provides:
//! - Stems, branches, elements and the 60-cycle stem–branch pair
//! - Four pillars from a [`PillarSource`] (the solar-term calendar by default)
//! - Weighted element tally, ten gods, twelve life stages
//! - Shinsal markers and heavenly nobleman lookup
//! - Daewoon ten-year cycles and the samsae three-year window
//! - [`SajuCalculator`], which ties it all into one [`SajuResult`]
//!
//! Everything here is a pure function of the birth input, the configuration
//! and an explicit reference year.

pub mod birth;
pub mod branch;
pub mod calculator;
pub mod config;
pub mod daewoon;
pub mod day_master;
pub mod element;
pub mod error;
pub mod ganji;
pub mod nobleman;
pub mod pillars;
pub mod samsae;
pub mod shinsal;
pub mod social_mask;
pub mod stem;
pub mod tally;
pub mod ten_god;
pub mod twelve_stage;

pub use birth::{BirthInput, DEFAULT_BIRTH_HOUR, Gender};
pub use branch::{ALL_BRANCHES, Branch};
pub use calculator::{PillarDetail, PillarTexts, SajuCalculator, SajuResult, calculate};
pub use config::SajuConfig;
pub use daewoon::{
    DAEWOON_COUNT, Daewoon, DaewoonAgeMethod, DaewoonDirection, DaewoonSequence, JeolDistance,
    daewoon_sequence, daewoon_start_age,
};
pub use day_master::{DayMasterTraits, day_master_traits};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity, element_relation};
pub use error::SajuError;
pub use ganji::Ganji;
pub use nobleman::{NoblemanResult, find_nobleman, nobleman_branches};
pub use pillars::{ALL_POSITIONS, FourPillars, PillarPosition, PillarSource, SolarTermCalendar};
pub use samsae::{
    MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR, SamsaePhase, SamsaeWindow, SamsaeYear,
    calendar_year_branch, samsae_branches, samsae_phase, samsae_window, validate_reference_year,
};
pub use shinsal::{ALL_SHINSAL, Shinsal, ShinsalHit, detect_shinsal};
pub use social_mask::social_mask_score;
pub use stem::{ALL_STEMS, Stem};
pub use tally::{ElementBalance, ElementTally, TOTAL_WEIGHT, element_tally};
pub use ten_god::{TenGod, branch_ten_god, ten_god};
pub use twelve_stage::{ALL_STAGES, TwelveStage, twelve_stage};

// Calendar types callers need for configuration and custom sources.
pub use saju_time::{CalendarOptions, CivilTime, SexagenaryChart, ZiHourRule};
