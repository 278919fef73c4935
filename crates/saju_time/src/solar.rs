//! Apparent geocentric solar longitude and ΔT.
//!
//! The solar theory is the low-precision series of Meeus ch. 25
//! (about 0.01° between 1900 and 2100, i.e. roughly a quarter of an hour
//! in the timing of a solar term). ΔT uses the Espenak–Meeus polynomials.
//!
//! All Julian Dates passed in here are UT unless the name says `tt`.

use crate::julian::{jd_to_centuries, jd_to_decimal_year};

/// Mean daily motion of the Sun in ecliptic longitude (degrees/day).
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 360.0 / 365.242_19;

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Espenak & Meeus (2006) polynomial fits, 1900–2150. Years outside that
/// window are clamped to its edges; callers reject them before this point.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year.clamp(1900.0, 2150.0);
    if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt_jd(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / 86_400.0
}

/// Apparent solar longitude (degrees, [0, 360)) at a TT Julian Date.
///
/// Includes nutation in longitude and aberration through the
/// `-0.00569 - 0.00478 sin Ω` correction.
pub fn apparent_solar_longitude_tt(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    let lambda = l0 + c - 0.005_69 - 0.004_78 * omega.sin();
    lambda.rem_euclid(360.0)
}

/// Apparent solar longitude (degrees, [0, 360)) at a UT Julian Date.
pub fn apparent_solar_longitude(jd_ut: f64) -> f64 {
    apparent_solar_longitude_tt(ut_to_tt_jd(jd_ut))
}

/// Normalize an angle difference to (-180, 180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}
