//! Civil (wall-clock) date and time in a fixed-offset time zone.
//!
//! `CivilTime` is the canonical input type of the calendar. Conversion to
//! a UT Julian Date needs the zone's UTC offset.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::CalendarError;
use crate::julian::{CE_DAY_TO_JDN, MINUTES_PER_DAY};
use crate::{MAX_YEAR, MIN_YEAR};

/// Largest civil UTC offset in minutes (UTC+14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Validated civil date and time, minute precision.
///
/// Only [`CivilTime::new`] and the conversions below produce values, so the
/// date and clock reading are always real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTime {
    dt: NaiveDateTime,
}

impl CivilTime {
    /// Build a civil time, rejecting impossible dates and clock readings
    /// and years the solar theory does not cover.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::OutOfRange(year));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        let dt = date
            .and_hms_opt(hour, minute, 0)
            .ok_or(CalendarError::InvalidTime { hour, minute })?;
        Ok(Self { dt })
    }

    pub fn year(&self) -> i32 {
        self.dt.year()
    }

    pub fn month(&self) -> u32 {
        self.dt.month()
    }

    pub fn day(&self) -> u32 {
        self.dt.day()
    }

    pub fn hour(&self) -> u32 {
        self.dt.hour()
    }

    pub fn minute(&self) -> u32 {
        self.dt.minute()
    }

    /// The same instant as a chrono value.
    pub fn to_naive(&self) -> NaiveDateTime {
        self.dt
    }

    /// Shift by a signed number of minutes, carrying across days.
    ///
    /// Panics if the result leaves chrono's date range.
    pub fn shifted(&self, minutes: i64) -> Self {
        Self {
            dt: self.dt + Duration::minutes(minutes),
        }
    }

    /// Julian Day Number of the civil date (noon-based integer day).
    pub fn julian_day_number(&self) -> i64 {
        self.dt.date().num_days_from_ce() as i64 + CE_DAY_TO_JDN
    }

    /// UT Julian Date of this wall-clock reading in a zone `offset_minutes` east of UTC.
    pub fn to_jd_ut(&self, offset_minutes: i32) -> f64 {
        let minutes = (self.hour() * 60 + self.minute()) as f64 - offset_minutes as f64;
        self.julian_day_number() as f64 - 0.5 + minutes / MINUTES_PER_DAY
    }

    /// Wall-clock reading of a UT Julian Date in a zone `offset_minutes` east of UTC,
    /// rounded to the nearest minute.
    pub fn from_jd_ut(jd_ut: f64, offset_minutes: i32) -> Result<Self, CalendarError> {
        let local = jd_ut + 0.5 + offset_minutes as f64 / MINUTES_PER_DAY;
        if !local.is_finite() {
            return Err(CalendarError::InvalidJulianDate(jd_ut));
        }
        let jdn = local.floor();
        let mut minute_of_day = ((local - jdn) * MINUTES_PER_DAY).round() as i64;
        let mut day_number = jdn as i64;
        if minute_of_day >= MINUTES_PER_DAY as i64 {
            minute_of_day -= MINUTES_PER_DAY as i64;
            day_number += 1;
        }
        let date = i32::try_from(day_number - CE_DAY_TO_JDN)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::InvalidJulianDate(jd_ut))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or(CalendarError::InvalidJulianDate(jd_ut))?;
        Ok(Self {
            dt: midnight + Duration::minutes(minute_of_day),
        })
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}

/// Validate a civil UTC offset.
pub fn validate_offset(offset_minutes: i32) -> Result<(), CalendarError> {
    if offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(CalendarError::InvalidOffset(offset_minutes));
    }
    Ok(())
}
