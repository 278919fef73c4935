//! The twelve jeol (節) solar terms that open each Saju month.
//!
//! A jeol is the moment the Sun's apparent longitude reaches
//! 315° + 30°·k. Ipchun (立春, 315°) opens the 寅 month and the Saju year.
//!
//! Search: coarse estimate from the Sun's mean motion, then bisection on
//! f(t) = λ(t) − target, the same scan-and-bisect pattern used for
//! sankranti and station searches.

use serde::Serialize;
use tracing::trace;

use crate::civil::CivilTime;
use crate::error::CalendarError;
use crate::julian::calendar_to_jd;
use crate::solar::{SUN_MEAN_MOTION_DEG_PER_DAY, apparent_solar_longitude, normalize_to_pm180};
use crate::{MAX_YEAR, MIN_YEAR};

/// Longitude of Ipchun, the start of the Saju year.
pub const IPCHUN_LONGITUDE_DEG: f64 = 315.0;

/// Width of a Saju month in solar longitude.
pub const JEOL_SPAN_DEG: f64 = 30.0;

/// Half-width of the bisection bracket around the mean-motion estimate.
const BRACKET_DAYS: f64 = 4.0;

/// Bisection stops when the bracket is narrower than this (≈0.1 s).
const CONVERGENCE_DAYS: f64 = 1e-6;

const MAX_BISECTION_ITER: u32 = 64;

/// The 12 jeol terms, in Saju month order (Ipchun first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Jeol {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baekro,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 jeol in Saju month order (index 0 = Ipchun, 寅 month).
pub const ALL_JEOL: [Jeol; 12] = [
    Jeol::Ipchun,
    Jeol::Gyeongchip,
    Jeol::Cheongmyeong,
    Jeol::Ipha,
    Jeol::Mangjong,
    Jeol::Soseo,
    Jeol::Ipchu,
    Jeol::Baekro,
    Jeol::Hallo,
    Jeol::Ipdong,
    Jeol::Daeseol,
    Jeol::Sohan,
];

const JEOL_NAMES: [(&str, &str); 12] = [
    ("입춘", "立春"),
    ("경칩", "驚蟄"),
    ("청명", "淸明"),
    ("입하", "立夏"),
    ("망종", "芒種"),
    ("소서", "小暑"),
    ("입추", "立秋"),
    ("백로", "白露"),
    ("한로", "寒露"),
    ("입동", "立冬"),
    ("대설", "大雪"),
    ("소한", "小寒"),
];

/// Typical Gregorian (month, day) of each jeol, used to seed the search.
const JEOL_TYPICAL_DATE: [(u32, u32); 12] = [
    (2, 4),
    (3, 6),
    (4, 5),
    (5, 6),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 7),
    (12, 7),
    (1, 6),
];

impl Jeol {
    /// 0-based Saju month index (Ipchun=0 .. Sohan=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baekro => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// Jeol opening the given Saju month (index taken mod 12).
    pub const fn from_month_index(idx: u8) -> Self {
        ALL_JEOL[(idx % 12) as usize]
    }

    /// Korean name.
    pub fn name(self) -> &'static str {
        JEOL_NAMES[self.index() as usize].0
    }

    /// Hanja name.
    pub fn hanja(self) -> &'static str {
        JEOL_NAMES[self.index() as usize].1
    }

    /// Apparent solar longitude at which this jeol begins.
    pub fn longitude_deg(self) -> f64 {
        (IPCHUN_LONGITUDE_DEG + JEOL_SPAN_DEG * self.index() as f64).rem_euclid(360.0)
    }

    /// Branch index (0=子 .. 11=亥) of the month this jeol opens.
    pub const fn month_branch_index(self) -> u8 {
        (self.index() + 2) % 12
    }
}

/// A jeol crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JeolEvent {
    pub jeol: Jeol,
    /// UT Julian Date of the crossing.
    pub jd_ut: f64,
}

impl JeolEvent {
    /// Wall-clock time of the crossing in a zone `offset_minutes` east of UTC.
    pub fn civil(&self, offset_minutes: i32) -> Result<CivilTime, CalendarError> {
        CivilTime::from_jd_ut(self.jd_ut, offset_minutes)
    }
}

/// Saju month index (0 = 寅 month opened by Ipchun) for a solar longitude.
pub fn month_index_from_longitude(lon_deg: f64) -> u8 {
    let since_ipchun = (lon_deg - IPCHUN_LONGITUDE_DEG).rem_euclid(360.0);
    ((since_ipchun / JEOL_SPAN_DEG).floor() as u8).min(11)
}

/// Find when the apparent solar longitude reaches `target_deg`, starting
/// from an estimate within a few days of the answer.
pub fn find_longitude_crossing(target_deg: f64, jd_guess: f64) -> Result<f64, CalendarError> {
    let f_at = |jd: f64| normalize_to_pm180(apparent_solar_longitude(jd) - target_deg);

    let mut t_a = jd_guess - BRACKET_DAYS;
    let mut t_b = jd_guess + BRACKET_DAYS;
    let mut f_a = f_at(t_a);
    let f_b = f_at(t_b);
    if f_a > 0.0 || f_b < 0.0 {
        return Err(CalendarError::NoConvergence(
            "solar longitude crossing not bracketed",
        ));
    }

    for iter in 0..MAX_BISECTION_ITER {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid);
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            trace!(target_deg, iter, "solar longitude crossing converged");
            break;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

/// The most recent jeol at or before `jd_ut`.
pub fn prev_jeol(jd_ut: f64) -> Result<JeolEvent, CalendarError> {
    let lon = apparent_solar_longitude(jd_ut);
    let month = month_index_from_longitude(lon);
    let jeol = Jeol::from_month_index(month);
    let into_month = normalize_to_pm180(lon - jeol.longitude_deg()).max(0.0);
    let guess = jd_ut - into_month / SUN_MEAN_MOTION_DEG_PER_DAY;
    let jd = find_longitude_crossing(jeol.longitude_deg(), guess)?;
    Ok(JeolEvent { jeol, jd_ut: jd })
}

/// The first jeol strictly after `jd_ut`.
pub fn next_jeol(jd_ut: f64) -> Result<JeolEvent, CalendarError> {
    let lon = apparent_solar_longitude(jd_ut);
    let month = month_index_from_longitude(lon);
    let jeol = Jeol::from_month_index(month + 1);
    let remaining = (jeol.longitude_deg() - lon).rem_euclid(360.0);
    let guess = jd_ut + remaining / SUN_MEAN_MOTION_DEG_PER_DAY;
    let jd = find_longitude_crossing(jeol.longitude_deg(), guess)?;
    Ok(JeolEvent { jeol, jd_ut: jd })
}

/// All 12 jeol falling in a Gregorian year, in calendar order (Sohan first).
pub fn jeol_terms_for_year(year: i32) -> Result<Vec<JeolEvent>, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::OutOfRange(year));
    }
    let mut events = Vec::with_capacity(12);
    for jeol in ALL_JEOL {
        let (month, day) = JEOL_TYPICAL_DATE[jeol.index() as usize];
        let guess = calendar_to_jd(year, month, day as f64);
        let jd = find_longitude_crossing(jeol.longitude_deg(), guess)?;
        events.push(JeolEvent { jeol, jd_ut: jd });
    }
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes_step_by_thirty() {
        assert_eq!(Jeol::Ipchun.longitude_deg(), 315.0);
        assert_eq!(Jeol::Gyeongchip.longitude_deg(), 345.0);
        assert_eq!(Jeol::Cheongmyeong.longitude_deg(), 15.0);
        assert_eq!(Jeol::Sohan.longitude_deg(), 285.0);
    }

    #[test]
    fn month_branches() {
        assert_eq!(Jeol::Ipchun.month_branch_index(), 2); // 寅
        assert_eq!(Jeol::Daeseol.month_branch_index(), 0); // 子
        assert_eq!(Jeol::Sohan.month_branch_index(), 1); // 丑
    }

    #[test]
    fn month_index_boundaries() {
        assert_eq!(month_index_from_longitude(315.0), 0);
        assert_eq!(month_index_from_longitude(314.999), 11);
        assert_eq!(month_index_from_longitude(0.0), 1);
        assert_eq!(month_index_from_longitude(284.9), 10);
        assert_eq!(month_index_from_longitude(285.0), 11);
    }

    #[test]
    fn names_distinct() {
        for (i, a) in ALL_JEOL.iter().enumerate() {
            for b in &ALL_JEOL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn crossing_hits_target() {
        let jd = find_longitude_crossing(315.0, calendar_to_jd(2024, 2, 4.0)).unwrap();
        let lon = apparent_solar_longitude(jd);
        assert!(normalize_to_pm180(lon - 315.0).abs() < 1e-4, "lon = {lon}");
    }

    #[test]
    fn bad_guess_is_rejected() {
        let far = calendar_to_jd(2024, 8, 1.0);
        assert!(matches!(
            find_longitude_crossing(315.0, far),
            Err(CalendarError::NoConvergence(_))
        ));
    }

    #[test]
    fn prev_and_next_bracket_instant() {
        let jd = calendar_to_jd(2024, 5, 20.0);
        let prev = prev_jeol(jd).unwrap();
        let next = next_jeol(jd).unwrap();
        assert_eq!(prev.jeol, Jeol::Ipha);
        assert_eq!(next.jeol, Jeol::Mangjong);
        assert!(prev.jd_ut <= jd && jd < next.jd_ut);
        assert!(next.jd_ut - prev.jd_ut > 29.0 && next.jd_ut - prev.jd_ut < 33.0);
    }

    #[test]
    fn year_table_sorted_and_complete() {
        let events = jeol_terms_for_year(2024).unwrap();
        assert_eq!(events.len(), 12);
        assert_eq!(events[0].jeol, Jeol::Sohan);
        assert_eq!(events[1].jeol, Jeol::Ipchun);
        assert!(events.windows(2).all(|w| w[0].jd_ut < w[1].jd_ut));
    }

    #[test]
    fn year_table_out_of_range() {
        assert_eq!(jeol_terms_for_year(1800), Err(CalendarError::OutOfRange(1800)));
    }
}
