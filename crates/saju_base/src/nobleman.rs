//! Heavenly nobleman (천을귀인, 天乙貴人) lookup by day master.
//!
//! 甲戊庚 → 丑未, 乙己 → 子申, 丙丁 → 亥酉, 辛 → 寅午, 壬癸 → 卯巳.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// The two nobleman branches of a day master.
pub const fn nobleman_branches(day_master: Stem) -> [Branch; 2] {
    match day_master {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Sin => [Branch::In, Branch::O],
        Stem::Im | Stem::Gye => [Branch::Myo, Branch::Sa],
    }
}

/// Nobleman lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoblemanResult {
    /// Both target branches for the day master.
    pub targets: [Branch; 2],
    /// Targets present among the pillar branches, deduplicated, in target order.
    pub found: Vec<Branch>,
    pub has_nobleman: bool,
}

/// Scan the pillar branches for the day master's nobleman branches.
pub fn find_nobleman(day_master: Stem, branches: &[Branch; 4]) -> NoblemanResult {
    let targets = nobleman_branches(day_master);
    let found: Vec<Branch> = targets
        .iter()
        .copied()
        .filter(|t| branches.contains(t))
        .collect();
    NoblemanResult {
        targets,
        has_nobleman: !found.is_empty(),
        found,
    }
}
