//! Social-mask score: how strongly a chart presents a composed public face.
//!
//! Starts at 75. Official weight adds 5 per unit, Resource adds 3, Output
//! subtracts 2; the result is clamped to [70, 99] and rounded.

use tracing::debug;

use crate::element::{ElementRelation, element_relation};
use crate::stem::Stem;
use crate::tally::ElementTally;

pub const BASE_SCORE: f64 = 75.0;
pub const MIN_SCORE: u8 = 70;
pub const MAX_SCORE: u8 = 99;

const OFFICIAL_FACTOR: f64 = 5.0;
const RESOURCE_FACTOR: f64 = 3.0;
const OUTPUT_FACTOR: f64 = -2.0;

const fn factor(relation: ElementRelation) -> f64 {
    match relation {
        ElementRelation::Official => OFFICIAL_FACTOR,
        ElementRelation::Resource => RESOURCE_FACTOR,
        ElementRelation::Output => OUTPUT_FACTOR,
        ElementRelation::Same | ElementRelation::Wealth => 0.0,
    }
}

/// Unclamped score.
pub fn raw_social_mask_score(tally: &ElementTally, day_master: Stem) -> f64 {
    let dm = day_master.element();
    tally
        .iter()
        .fold(BASE_SCORE, |acc, (e, count)| {
            acc + count * factor(element_relation(dm, e))
        })
}

/// Score in [70, 99].
pub fn social_mask_score(tally: &ElementTally, day_master: Stem) -> u8 {
    let raw = raw_social_mask_score(tally, day_master);
    let clamped = raw.clamp(MIN_SCORE as f64, MAX_SCORE as f64);
    if clamped != raw {
        debug!(raw, clamped, "social mask score clamped");
    }
    clamped.round() as u8
}
