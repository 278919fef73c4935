//! Ten gods (십신, 十神): how a character relates to the day master.
//!
//! The element relation (same / output / wealth / official / resource) picks
//! the pair; polarity picks the member. Same polarity gives the "indirect"
//! member (편), opposite polarity the "direct" one (정). Branches are read
//! through their representative stem.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{ElementRelation, element_relation};
use crate::stem::Stem;

/// The ten relational labels plus the day master's own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// The day stem itself (일간).
    DayMaster,
    /// 비견: same element, same polarity.
    Bigyeon,
    /// 겁재: same element, opposite polarity.
    Geopjae,
    /// 식신: output, same polarity.
    Siksin,
    /// 상관: output, opposite polarity.
    Sanggwan,
    /// 편재: wealth, same polarity.
    Pyeonjae,
    /// 정재: wealth, opposite polarity.
    Jeongjae,
    /// 편관: official, same polarity.
    Pyeongwan,
    /// 정관: official, opposite polarity.
    Jeonggwan,
    /// 편인: resource, same polarity.
    Pyeonin,
    /// 정인: resource, opposite polarity.
    Jeongin,
}

impl TenGod {
    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayMaster => "일간",
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::DayMaster => "self",
            Self::Bigyeon => "companion",
            Self::Geopjae => "rival",
            Self::Siksin => "output (eating god)",
            Self::Sanggwan => "output (hurting officer)",
            Self::Pyeonjae => "indirect wealth",
            Self::Jeongjae => "direct wealth",
            Self::Pyeongwan => "indirect authority",
            Self::Jeonggwan => "direct authority",
            Self::Pyeonin => "indirect resource",
            Self::Jeongin => "direct resource",
        }
    }

    /// The element relation behind this label (`None` for the day master).
    pub const fn relation(self) -> Option<ElementRelation> {
        match self {
            Self::DayMaster => None,
            Self::Bigyeon | Self::Geopjae => Some(ElementRelation::Same),
            Self::Siksin | Self::Sanggwan => Some(ElementRelation::Output),
            Self::Pyeonjae | Self::Jeongjae => Some(ElementRelation::Wealth),
            Self::Pyeongwan | Self::Jeonggwan => Some(ElementRelation::Official),
            Self::Pyeonin | Self::Jeongin => Some(ElementRelation::Resource),
        }
    }
}

/// Ten god of a stem relative to the day master.
///
/// Never returns [`TenGod::DayMaster`]; the day stem's own position is
/// labelled by the caller. A stem equal to the day master reads as 비견.
pub fn ten_god(day_master: Stem, target: Stem) -> TenGod {
    let same_polarity = day_master.polarity() == target.polarity();
    match (element_relation(day_master.element(), target.element()), same_polarity) {
        (ElementRelation::Same, true) => TenGod::Bigyeon,
        (ElementRelation::Same, false) => TenGod::Geopjae,
        (ElementRelation::Output, true) => TenGod::Siksin,
        (ElementRelation::Output, false) => TenGod::Sanggwan,
        (ElementRelation::Wealth, true) => TenGod::Pyeonjae,
        (ElementRelation::Wealth, false) => TenGod::Jeongjae,
        (ElementRelation::Official, true) => TenGod::Pyeongwan,
        (ElementRelation::Official, false) => TenGod::Jeonggwan,
        (ElementRelation::Resource, true) => TenGod::Pyeonin,
        (ElementRelation::Resource, false) => TenGod::Jeongin,
    }
}

/// Ten god of a branch, read through its representative stem.
pub fn branch_ten_god(day_master: Stem, target: Branch) -> TenGod {
    ten_god(day_master, target.representative_stem())
}
