//! The 12 earthly branches (지지, 地支).
//!
//! Each branch carries an element, a zodiac animal, and a representative
//! stem (정기, the main hidden stem) used when a branch is read against the
//! day master.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::stem::Stem;

/// The 12 earthly branches, 자(子) through 해(亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

// (korean, hanja, animal)
const BRANCH_NAMES: [(&str, &str, &str); 12] = [
    ("자", "子", "rat"),
    ("축", "丑", "ox"),
    ("인", "寅", "tiger"),
    ("묘", "卯", "rabbit"),
    ("진", "辰", "dragon"),
    ("사", "巳", "snake"),
    ("오", "午", "horse"),
    ("미", "未", "goat"),
    ("신", "申", "monkey"),
    ("유", "酉", "rooster"),
    ("술", "戌", "dog"),
    ("해", "亥", "pig"),
];

impl Branch {
    /// Branch at a 0-based index, or `None` outside 0..=11.
    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx < 12 {
            Some(ALL_BRANCHES[idx as usize])
        } else {
            None
        }
    }

    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Korean name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize].0
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize].1
    }

    /// Zodiac animal (English).
    pub fn animal(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize].2
    }

    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Main hidden stem (정기) used for ten-god readings of a branch.
    pub const fn representative_stem(self) -> Stem {
        match self {
            Self::Ja => Stem::Gye,
            Self::Chuk => Stem::Gi,
            Self::In => Stem::Gap,
            Self::Myo => Stem::Eul,
            Self::Jin => Stem::Mu,
            Self::Sa => Stem::Byeong,
            Self::O => Stem::Jeong,
            Self::Mi => Stem::Gi,
            Self::Sin => Stem::Gyeong,
            Self::Yu => Stem::Sin,
            Self::Sul => Stem::Mu,
            Self::Hae => Stem::Im,
        }
    }

    /// Step forward (positive) or backward (negative) around the 12-cycle.
    pub fn offset(self, steps: i32) -> Self {
        ALL_BRANCHES[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }
}

impl TryFrom<u8> for Branch {
    type Error = SajuError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Self::from_index(idx).ok_or(SajuError::InvalidBranchIndex(idx))
    }
}
