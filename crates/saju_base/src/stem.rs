//! The 10 heavenly stems (천간, 天干).
//!
//! Stems pair off by element (甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal,
//! 壬癸 water); the first of each pair is yang.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::SajuError;

/// The 10 heavenly stems, 갑(甲) through 계(癸).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_NAMES: [(&str, &str); 10] = [
    ("갑", "甲"),
    ("을", "乙"),
    ("병", "丙"),
    ("정", "丁"),
    ("무", "戊"),
    ("기", "己"),
    ("경", "庚"),
    ("신", "辛"),
    ("임", "壬"),
    ("계", "癸"),
];

impl Stem {
    /// Stem at a 0-based index, or `None` outside 0..=9.
    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx < 10 {
            Some(ALL_STEMS[idx as usize])
        } else {
            None
        }
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Korean name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize].0
    }

    pub fn hanja(self) -> &'static str {
        STEM_NAMES[self.index() as usize].1
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Step forward (positive) or backward (negative) around the 10-cycle.
    pub fn offset(self, steps: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }
}

impl TryFrom<u8> for Stem {
    type Error = SajuError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Self::from_index(idx).ok_or(SajuError::InvalidStemIndex(idx))
    }
}
