//! Samsae (삼재, 三災): the recurring three-year hardship window.
//!
//! Birth-year branches form four triads; each triad owns one window of
//! three consecutive branches (entering, staying, leaving):
//!
//! | birth triad | window |
//! |-------------|--------|
//! | 申子辰      | 寅卯辰 |
//! | 亥卯未      | 巳午未 |
//! | 寅午戌      | 申酉戌 |
//! | 巳酉丑      | 亥子丑 |
//!
//! Calendar year `Y` carries branch `(Y - 4) mod 12` (2024 = 辰).

use serde::Serialize;

use crate::branch::Branch;
use crate::error::SajuError;

/// Default number of years reported, starting at the reference year.
pub const DEFAULT_SAMSAE_YEARS: u8 = 5;

/// Earliest accepted reference year.
pub const MIN_REFERENCE_YEAR: i32 = 1;
/// Latest accepted reference year (four-digit CE years).
pub const MAX_REFERENCE_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SamsaePhase {
    /// 들삼재: first year of the window.
    Deul,
    /// 눌삼재: middle year.
    Nul,
    /// 날삼재: last year.
    Nal,
    None,
}

impl SamsaePhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deul => "들삼재",
            Self::Nul => "눌삼재",
            Self::Nal => "날삼재",
            Self::None => "해당 없음",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Deul => "entering",
            Self::Nul => "staying",
            Self::Nal => "leaving",
            Self::None => "none",
        }
    }

    pub const fn is_samsae(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Branch of a calendar year.
pub fn calendar_year_branch(year: i32) -> Branch {
    Branch::Ja.offset((i64::from(year) - 4).rem_euclid(12) as i32)
}

/// Reject reference years outside [`MIN_REFERENCE_YEAR`]..=[`MAX_REFERENCE_YEAR`].
pub fn validate_reference_year(year: i32) -> Result<(), SajuError> {
    if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) {
        return Err(SajuError::InvalidReferenceYear(year));
    }
    Ok(())
}

/// The (entering, staying, leaving) branches for a birth-year branch.
pub const fn samsae_branches(birth_branch: Branch) -> [Branch; 3] {
    match birth_branch {
        Branch::Sin | Branch::Ja | Branch::Jin => [Branch::In, Branch::Myo, Branch::Jin],
        Branch::Hae | Branch::Myo | Branch::Mi => [Branch::Sa, Branch::O, Branch::Mi],
        Branch::In | Branch::O | Branch::Sul => [Branch::Sin, Branch::Yu, Branch::Sul],
        Branch::Sa | Branch::Yu | Branch::Chuk => [Branch::Hae, Branch::Ja, Branch::Chuk],
    }
}

/// Phase of a calendar year for someone born in a `birth_branch` year.
pub fn samsae_phase(birth_branch: Branch, year: i32) -> SamsaePhase {
    let [deul, nul, nal] = samsae_branches(birth_branch);
    let b = calendar_year_branch(year);
    if b == deul {
        SamsaePhase::Deul
    } else if b == nul {
        SamsaePhase::Nul
    } else if b == nal {
        SamsaePhase::Nal
    } else {
        SamsaePhase::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamsaeYear {
    pub year: i32,
    pub branch: Branch,
    pub phase: SamsaePhase,
}

/// Samsae outlook for consecutive years from a reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamsaeWindow {
    pub birth_branch: Branch,
    pub window: [Branch; 3],
    pub years: Vec<SamsaeYear>,
}

impl SamsaeWindow {
    /// Years inside the window.
    pub fn samsae_years(&self) -> impl Iterator<Item = &SamsaeYear> + '_ {
        self.years.iter().filter(|y| y.phase.is_samsae())
    }
}

/// Tag `count` years starting at `reference_year`.
pub fn samsae_window(
    birth_branch: Branch,
    reference_year: i32,
    count: u8,
) -> Result<SamsaeWindow, SajuError> {
    validate_reference_year(reference_year)?;
    let years = (0..i32::from(count))
        .map(|i| {
            let year = reference_year + i;
            SamsaeYear {
                year,
                branch: calendar_year_branch(year),
                phase: samsae_phase(birth_branch, year),
            }
        })
        .collect();
    Ok(SamsaeWindow {
        birth_branch,
        window: samsae_branches(birth_branch),
        years,
    })
}
