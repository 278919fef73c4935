//! Calculator configuration.

use serde::{Deserialize, Serialize};

use saju_time::{CalendarOptions, KST_OFFSET_MINUTES, ZiHourRule};

use crate::daewoon::DaewoonAgeMethod;
use crate::error::SajuError;
use crate::samsae::DEFAULT_SAMSAE_YEARS;

/// Longest samsae outlook, one full branch cycle.
pub const MAX_SAMSAE_YEARS: u8 = 12;

/// Settings for [`SajuCalculator`](crate::SajuCalculator).
///
/// Every field has a default, so a partial TOML file is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    /// Civil time zone of birth input, minutes east of UTC.
    /// Default: 540 (KST).
    pub utc_offset_minutes: i32,

    /// Birthplace longitude, degrees east. When set, day and hour pillars
    /// use local mean time. Default: unset.
    pub longitude_deg: Option<f64>,

    /// Day turnover in the 子 hour. Default: midnight.
    pub zi_hour: ZiHourRule,

    /// Daewoon starting-age method. Default: heuristic.
    pub daewoon_age: DaewoonAgeMethod,

    /// Years in the samsae outlook, starting at the reference year.
    /// Default: 5.
    pub samsae_years: u8,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: KST_OFFSET_MINUTES,
            longitude_deg: None,
            zi_hour: ZiHourRule::Midnight,
            daewoon_age: DaewoonAgeMethod::Heuristic,
            samsae_years: DEFAULT_SAMSAE_YEARS,
        }
    }
}

impl SajuConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), SajuError> {
        self.calendar_options()
            .validate()
            .map_err(|e| SajuError::InvalidConfig(e.to_string()))?;
        if self.samsae_years == 0 || self.samsae_years > MAX_SAMSAE_YEARS {
            return Err(SajuError::InvalidConfig(format!(
                "samsae_years must be in 1..={MAX_SAMSAE_YEARS}, got {}",
                self.samsae_years
            )));
        }
        Ok(())
    }

    /// Calendar options for the solar-term calendar.
    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions {
            utc_offset_minutes: self.utc_offset_minutes,
            longitude_deg: self.longitude_deg,
            zi_hour: self.zi_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SajuConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.calendar_options(), CalendarOptions::default());
    }

    #[test]
    fn rejects_bad_offset() {
        let cfg = SajuConfig {
            utc_offset_minutes: 15 * 60,
            ..SajuConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SajuError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_longitude() {
        let cfg = SajuConfig {
            longitude_deg: Some(200.0),
            ..SajuConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_samsae_years_out_of_range() {
        for n in [0, 13] {
            let cfg = SajuConfig {
                samsae_years: n,
                ..SajuConfig::default()
            };
            assert!(cfg.validate().is_err(), "{n}");
        }
    }
}
