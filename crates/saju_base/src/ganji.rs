//! Stem–branch pairs (간지, 干支) and the 60-term cycle.
//!
//! The cycle advances stem and branch together, so only same-polarity
//! pairs occur. The epoch is CE 1984 = 갑자 (cycle index 0).

use serde::Serialize;

use saju_time::RawPillar;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::SajuError;
use crate::stem::{ALL_STEMS, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Reference epoch: CE 1984 = 갑자 (index 0).
pub const GANJI_EPOCH_YEAR: i32 = 1984;

/// One stem–branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ganji {
    pub stem: Stem,
    pub branch: Branch,
}

impl Ganji {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at position `idx` (taken mod 60) of the cycle.
    pub fn from_cycle(idx: u8) -> Self {
        let idx = idx % CYCLE_LEN;
        Self {
            stem: ALL_STEMS[(idx % 10) as usize],
            branch: ALL_BRANCHES[(idx % 12) as usize],
        }
    }

    /// Position in the 60-cycle, or `None` for a mixed-polarity pair.
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // idx ≡ s (mod 10), idx ≡ b (mod 12)
        (0..6)
            .map(|k| s + 10 * k)
            .find(|idx| idx % 12 == b)
    }

    /// Year pair for a Saju year (the year that begins at Ipchun).
    pub fn for_year(saju_year: i32) -> Self {
        Self::from_cycle((saju_year - GANJI_EPOCH_YEAR).rem_euclid(60) as u8)
    }

    /// Korean reading, e.g. "갑자".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Hanja, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Display label, e.g. "갑자(甲子)".
    pub fn label(self) -> String {
        format!("{}({})", self.name(), self.hanja())
    }

    /// Step stem and branch together, forward or backward.
    pub fn offset(self, steps: i32) -> Self {
        Self {
            stem: self.stem.offset(steps),
            branch: self.branch.offset(steps),
        }
    }
}

impl TryFrom<RawPillar> for Ganji {
    type Error = SajuError;

    /// Validates both indices; the calendar is trusted for polarity.
    fn try_from(raw: RawPillar) -> Result<Self, Self::Error> {
        Ok(Self {
            stem: Stem::try_from(raw.stem)?,
            branch: Branch::try_from(raw.branch)?,
        })
    }
}

impl std::fmt::Display for Ganji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
