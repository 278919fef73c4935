//! Civil date/time → sexagenary (干支) Year, Month, Day and Hour indices.
//!
//! Conventions:
//! - Year: changes at Ipchun (Sun at 315°), not on January 1 or the lunar new year.
//! - Month: changes at each jeol; the 寅 month starts at Ipchun.
//! - Day: continuous 60-day count, JDN 2451545 (2000-01-01) = 戊午.
//! - Hour: two-hour branches, 子 covering 23:00–00:59. The 23:00 hour always
//!   takes its stem from the following day; [`ZiHourRule`] decides whether
//!   the day pillar also turns over at 23:00.
//!
//! Stems are 0=甲 .. 9=癸 and branches 0=子 .. 11=亥 throughout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::civil::{CivilTime, validate_offset};
use crate::error::CalendarError;
use crate::solar::apparent_solar_longitude;
use crate::solar_term::{month_index_from_longitude, next_jeol, prev_jeol};

/// Offset that maps a Julian Day Number onto the 60-day cycle (甲子 = 0).
pub const DAY_CYCLE_JDN_OFFSET: i64 = 49;

/// CE year whose Saju year is 甲子 modulo 60 (1984 = 甲子).
pub const CYCLE_EPOCH_YEAR: i32 = 1984;

/// Korean Standard Time, UTC+09:00.
pub const KST_OFFSET_MINUTES: i32 = 540;

/// When the day pillar turns over around the 子 hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourRule {
    /// Day changes at 00:00; 23:00–23:59 keeps the current day (야자시).
    #[default]
    Midnight,
    /// Day changes at 23:00 (조자시 for the whole 子 hour).
    Early,
}

/// Calendar conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Civil time zone of the input, minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Birthplace longitude (degrees east). When set, day and hour pillars use
    /// local mean time: 4 minutes per degree from the zone meridian.
    pub longitude_deg: Option<f64>,
    pub zi_hour: ZiHourRule,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            utc_offset_minutes: KST_OFFSET_MINUTES,
            longitude_deg: None,
            zi_hour: ZiHourRule::Midnight,
        }
    }
}

impl CalendarOptions {
    /// Validate offset and longitude.
    pub fn validate(&self) -> Result<(), CalendarError> {
        validate_offset(self.utc_offset_minutes)?;
        if let Some(lon) = self.longitude_deg {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(CalendarError::InvalidLongitude(lon));
            }
        }
        Ok(())
    }

    /// Minutes to add to zone time to get local mean time (0 without a longitude).
    pub fn mean_time_correction_minutes(&self) -> i64 {
        match self.longitude_deg {
            Some(lon) => {
                let zone_meridian = self.utc_offset_minutes as f64 / 4.0;
                ((lon - zone_meridian) * 4.0).round() as i64
            }
            None => 0,
        }
    }
}

/// One stem/branch index pair as produced by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RawPillar {
    pub stem: u8,
    pub branch: u8,
}

impl RawPillar {
    /// Pillar at position `idx` of the 60-cycle.
    pub const fn from_cycle(idx: u8) -> Self {
        Self {
            stem: idx % 10,
            branch: idx % 12,
        }
    }
}

/// Sexagenary conversion of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SexagenaryChart {
    pub year: RawPillar,
    pub month: RawPillar,
    pub day: RawPillar,
    pub hour: RawPillar,
    /// Saju year (changes at Ipchun).
    pub saju_year: i32,
    /// Apparent solar longitude at birth (degrees).
    pub solar_longitude_deg: f64,
    /// UT Julian Date of the birth moment.
    pub jd_ut: f64,
    /// Days since the jeol that opened the birth month.
    pub days_since_jeol: f64,
    /// Days until the jeol that opens the next month.
    pub days_until_jeol: f64,
}

/// Year pillar of a Saju year.
pub fn year_pillar(saju_year: i32) -> RawPillar {
    RawPillar {
        stem: (saju_year - CYCLE_EPOCH_YEAR).rem_euclid(10) as u8,
        branch: (saju_year - CYCLE_EPOCH_YEAR).rem_euclid(12) as u8,
    }
}

/// Month pillar from the year stem and Saju month index (0 = 寅 month).
///
/// The 寅 month stem follows 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub fn month_pillar(year_stem: u8, month_index: u8) -> RawPillar {
    let first_stem = (year_stem % 5) * 2 + 2;
    RawPillar {
        stem: (first_stem + month_index) % 10,
        branch: (month_index + 2) % 12,
    }
}

/// Day pillar from a Julian Day Number.
pub fn day_pillar(jdn: i64) -> RawPillar {
    RawPillar::from_cycle((jdn + DAY_CYCLE_JDN_OFFSET).rem_euclid(60) as u8)
}

/// Hour branch for a clock hour (子 = 23:00–00:59).
pub const fn hour_branch(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar from the stem of the day that owns the hour.
///
/// The 子 hour stem follows 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub fn hour_pillar(day_stem: u8, hour: u32) -> RawPillar {
    let branch = hour_branch(hour);
    RawPillar {
        stem: ((day_stem % 5) * 2 + branch) % 10,
        branch,
    }
}

/// Convert a civil birth moment to its four sexagenary pillars.
pub fn sexagenary_chart(
    civil: &CivilTime,
    opts: &CalendarOptions,
) -> Result<SexagenaryChart, CalendarError> {
    opts.validate()?;

    let jd_ut = civil.to_jd_ut(opts.utc_offset_minutes);
    let lon = apparent_solar_longitude(jd_ut);
    let month_index = month_index_from_longitude(lon);

    // Jan/Feb instants in the 子 or 丑 month precede Ipchun.
    let saju_year = if civil.month() <= 2 && month_index >= 10 {
        civil.year() - 1
    } else {
        civil.year()
    };
    let year = year_pillar(saju_year);
    let month = month_pillar(year.stem, month_index);

    let local = civil.shifted(opts.mean_time_correction_minutes());
    let next_day = local.julian_day_number() + 1;
    let day_jdn = match (opts.zi_hour, local.hour()) {
        (ZiHourRule::Early, 23) => next_day,
        _ => local.julian_day_number(),
    };
    let day = day_pillar(day_jdn);
    let hour_owner = if local.hour() == 23 {
        day_pillar(next_day)
    } else {
        day
    };
    let hour = hour_pillar(hour_owner.stem, local.hour());

    let prev = prev_jeol(jd_ut)?;
    let next = next_jeol(jd_ut)?;

    debug!(
        %civil,
        saju_year,
        solar_longitude = lon,
        month_index,
        "sexagenary conversion"
    );

    Ok(SexagenaryChart {
        year,
        month,
        day,
        hour,
        saju_year,
        solar_longitude_deg: lon,
        jd_ut,
        days_since_jeol: (jd_ut - prev.jd_ut).max(0.0),
        days_until_jeol: (next.jd_ut - jd_ut).max(0.0),
    })
}
