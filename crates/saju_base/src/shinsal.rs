//! Shinsal (신살) star markers triggered by branches in the chart.
//!
//! The 12 branches split into three groups of four:
//! 도화 子午卯酉, 역마 寅申巳亥, 화개 辰戌丑未. Every pillar branch counts
//! toward its group.

use serde::Serialize;

use crate::branch::Branch;

/// The three star kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shinsal {
    /// 도화살: romance / charm.
    Dohwa,
    /// 역마살: travel / movement.
    Yeokma,
    /// 화개살: artistry / solitude.
    Hwagae,
}

/// All 3 kinds in reporting order.
pub const ALL_SHINSAL: [Shinsal; 3] = [Shinsal::Dohwa, Shinsal::Yeokma, Shinsal::Hwagae];

impl Shinsal {
    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dohwa => "도화살",
            Self::Yeokma => "역마살",
            Self::Hwagae => "화개살",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Dohwa => "romance star",
            Self::Yeokma => "travel star",
            Self::Hwagae => "artistic-solitude star",
        }
    }

    /// The four branches that trigger this star.
    pub const fn trigger_branches(self) -> [Branch; 4] {
        match self {
            Self::Dohwa => [Branch::Ja, Branch::O, Branch::Myo, Branch::Yu],
            Self::Yeokma => [Branch::In, Branch::Sin, Branch::Sa, Branch::Hae],
            Self::Hwagae => [Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi],
        }
    }

    /// The star a branch belongs to.
    pub const fn for_branch(branch: Branch) -> Self {
        match branch {
            Branch::Ja | Branch::O | Branch::Myo | Branch::Yu => Self::Dohwa,
            Branch::In | Branch::Sin | Branch::Sa | Branch::Hae => Self::Yeokma,
            Branch::Jin | Branch::Sul | Branch::Chuk | Branch::Mi => Self::Hwagae,
        }
    }
}

/// A star present in the chart, with how many pillar branches trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShinsalHit {
    pub kind: Shinsal,
    pub count: u8,
}

/// Stars present among the four pillar branches, in [`ALL_SHINSAL`] order.
pub fn detect_shinsal(branches: &[Branch; 4]) -> Vec<ShinsalHit> {
    ALL_SHINSAL
        .iter()
        .filter_map(|&kind| {
            let count = branches
                .iter()
                .filter(|&&b| Shinsal::for_branch(b) == kind)
                .count() as u8;
            (count > 0).then_some(ShinsalHit { kind, count })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn groups_partition_branches() {
        let mut seen = [0u8; 12];
        for kind in ALL_SHINSAL {
            for b in kind.trigger_branches() {
                seen[b.index() as usize] += 1;
                assert_eq!(Shinsal::for_branch(b), kind);
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn counts_repeated_branches() {
        let hits = detect_shinsal(&[Branch::Ja, Branch::O, Branch::In, Branch::Yu]);
        assert_eq!(
            hits,
            vec![
                ShinsalHit {
                    kind: Shinsal::Dohwa,
                    count: 3
                },
                ShinsalHit {
                    kind: Shinsal::Yeokma,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn counts_sum_to_four() {
        let hits = detect_shinsal(&[Branch::Sa, Branch::Ja, Branch::In, Branch::O]);
        let total: u8 = hits.iter().map(|h| h.count).sum();
        assert_eq!(total, 4);
        assert!(hits.iter().all(|h| h.count > 0));
    }

    #[test]
    fn single_group_chart() {
        let hits = detect_shinsal(&[Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, Shinsal::Hwagae);
        assert_eq!(hits[0].count, 4);
    }
}
