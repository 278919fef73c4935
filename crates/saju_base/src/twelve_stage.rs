//! Twelve life stages (십이운성, 十二運星) of the day master across the branches.
//!
//! Yang stems run forward from their 장생 branch, yin stems run backward:
//! 甲 亥, 丙戊 寅, 庚 巳, 壬 申; 乙 午, 丁己 酉, 辛 子, 癸 卯.
//! The table below is that rule written out; a test regenerates it.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// The 12 stages, birth through nurture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum TwelveStage {
    Jangsaeng,
    Mokyok,
    Gwandae,
    Geonrok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

/// All 12 stages in cycle order.
pub const ALL_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mokyok,
    TwelveStage::Gwandae,
    TwelveStage::Geonrok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

// (korean, hanja, english)
const STAGE_NAMES: [(&str, &str, &str); 12] = [
    ("장생", "長生", "birth"),
    ("목욕", "沐浴", "bathing"),
    ("관대", "冠帶", "cap"),
    ("건록", "建祿", "prime"),
    ("제왕", "帝旺", "peak"),
    ("쇠", "衰", "decline"),
    ("병", "病", "sickness"),
    ("사", "死", "death"),
    ("묘", "墓", "burial"),
    ("절", "絶", "termination"),
    ("태", "胎", "shelter"),
    ("양", "養", "nurture"),
];

/// Stage index by [stem][branch].
pub const TWELVE_STAGE_TABLE: [[u8; 12]; 10] = [
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],  // 甲
    [6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7],  // 乙
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],  // 丙
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],  // 丁
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],  // 戊
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],  // 己
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6],  // 庚
    [0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1],  // 辛
    [4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3],  // 壬
    [3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5, 4],  // 癸
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        match self {
            Self::Jangsaeng => 0,
            Self::Mokyok => 1,
            Self::Gwandae => 2,
            Self::Geonrok => 3,
            Self::Jewang => 4,
            Self::Soe => 5,
            Self::Byeong => 6,
            Self::Sa => 7,
            Self::Myo => 8,
            Self::Jeol => 9,
            Self::Tae => 10,
            Self::Yang => 11,
        }
    }

    /// Korean name.
    pub fn name(self) -> &'static str {
        STAGE_NAMES[self.index() as usize].0
    }

    pub fn hanja(self) -> &'static str {
        STAGE_NAMES[self.index() as usize].1
    }

    pub fn english_name(self) -> &'static str {
        STAGE_NAMES[self.index() as usize].2
    }
}

/// Branch where a stem's 장생 stage falls.
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Gyeong => Branch::Sa,
        Stem::Im => Branch::Sin,
        Stem::Eul => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Sin => Branch::Ja,
        Stem::Gye => Branch::Myo,
    }
}

/// Stage of `stem` at `branch`.
pub fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let idx = TWELVE_STAGE_TABLE[stem.index() as usize][branch.index() as usize];
    ALL_STAGES[idx as usize]
}
