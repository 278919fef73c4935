//! Birth input types.

use serde::{Deserialize, Serialize};

use saju_time::CivilTime;

use crate::error::SajuError;

/// Hour assumed when the birth hour is unknown.
pub const DEFAULT_BIRTH_HOUR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "남" => Ok(Self::Male),
            "female" | "f" | "여" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}', expected male or female")),
        }
    }
}

/// Birth moment as entered: civil date, optional clock time, gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Clock hour 0..=23; `None` when unknown.
    pub hour: Option<u32>,
    pub minute: u32,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(year: i32, month: u32, day: u32, hour: Option<u32>, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute: 0,
            gender,
        }
    }

    pub fn with_minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    /// Hour used for the calculation (noon when unknown).
    pub fn effective_hour(&self) -> u32 {
        self.hour.unwrap_or(DEFAULT_BIRTH_HOUR)
    }

    /// Validated civil time for the calendar.
    pub fn civil_time(&self) -> Result<CivilTime, SajuError> {
        let hour = self.effective_hour();
        if hour > 23 {
            return Err(SajuError::InvalidHour(hour));
        }
        Ok(CivilTime::new(
            self.year,
            self.month,
            self.day,
            hour,
            self.minute,
        )?)
    }
}
