//! Error types for calendar conversion.

use thiserror::Error;

/// Errors from civil-time validation, solar-term search, or sexagenary conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Not a real Gregorian calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside the clock range.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Year outside the range covered by the solar theory and ΔT model.
    #[error("year {0} is outside the supported range {min}..={max}", min = crate::MIN_YEAR, max = crate::MAX_YEAR)]
    OutOfRange(i32),
    /// UTC offset larger than ±14 hours.
    #[error("UTC offset of {0} minutes is not a valid civil time zone")]
    InvalidOffset(i32),
    /// Longitude outside [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    /// Julian Date that maps to no representable calendar date.
    #[error("Julian Date {0} has no calendar date")]
    InvalidJulianDate(f64),
    /// Solar-term bisection did not bracket a crossing.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
