//! Error types for Saju calculations.

use saju_time::CalendarError;
use thiserror::Error;

/// Errors from Saju chart calculation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Error from the calendar collaborator (date validation, solar terms).
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Hour outside 0..=23.
    #[error("invalid hour {0}, expected 0..=23")]
    InvalidHour(u32),
    /// Stem index outside 0..=9.
    #[error("invalid stem index {0}, expected 0..=9")]
    InvalidStemIndex(u8),
    /// Branch index outside 0..=11.
    #[error("invalid branch index {0}, expected 0..=11")]
    InvalidBranchIndex(u8),
    /// Samsae reference year outside the supported calendar years.
    #[error(
        "invalid reference year {0}, expected {min}..={max}",
        min = crate::samsae::MIN_REFERENCE_YEAR,
        max = crate::samsae::MAX_REFERENCE_YEAR
    )]
    InvalidReferenceYear(i32),
    /// Configuration rejected by `validate()`.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
