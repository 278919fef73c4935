//! Solar-term calendar and sexagenary conversion for Saju charts.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian conversions
//! - Apparent solar longitude (Meeus low-precision theory) with ΔT
//! - Jeol (節) solar-term search: previous/next term and yearly tables
//! - Civil date/time → Year/Month/Day/Hour stem and branch indices
//!
//! All implementations are clean-room, derived from Meeus and the
//! traditional 60-cycle conventions.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sexagenary;
pub mod solar;
pub mod solar_term;

/// Earliest supported civil year.
pub const MIN_YEAR: i32 = 1900;

/// Latest supported civil year.
pub const MAX_YEAR: i32 = 2100;

pub use civil::{CivilTime, MAX_UTC_OFFSET_MINUTES, validate_offset};
pub use error::CalendarError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
pub use sexagenary::{
    CalendarOptions, KST_OFFSET_MINUTES, RawPillar, SexagenaryChart, ZiHourRule, day_pillar,
    hour_pillar, month_pillar, sexagenary_chart, year_pillar,
};
pub use solar::{apparent_solar_longitude, delta_t_seconds};
pub use solar_term::{
    ALL_JEOL, Jeol, JeolEvent, find_longitude_crossing, jeol_terms_for_year,
    month_index_from_longitude, next_jeol, prev_jeol,
};
