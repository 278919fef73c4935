//! Weighted five-element tally over the eight characters of a chart.
//!
//! Every stem and branch contributes its element with weight 1.0, except the
//! day stem (1.5) and the month branch (2.5, the season). Total mass is 10.0.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillars::FourPillars;

/// Weight of an ordinary stem or branch.
pub const BASE_WEIGHT: f64 = 1.0;

/// Weight of the day stem (day master).
pub const DAY_STEM_WEIGHT: f64 = 1.5;

/// Weight of the month branch (season, 월령).
pub const MONTH_BRANCH_WEIGHT: f64 = 2.5;

/// Total weighted mass of any chart: 3 + 1.5 + 3 + 2.5.
pub const TOTAL_WEIGHT: f64 = 10.0;

/// Weighted count per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ElementTally {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementTally {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element, weight: f64) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += weight;
    }

    /// (element, count) in generating order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, c)| c).sum()
    }

    /// Strongest, weakest and absent elements.
    pub fn balance(&self) -> ElementBalance {
        let mut strongest = Element::Wood;
        let mut weakest = Element::Wood;
        for (e, count) in self.iter() {
            if count > self.get(strongest) {
                strongest = e;
            }
            if count < self.get(weakest) {
                weakest = e;
            }
        }
        let missing = self
            .iter()
            .filter(|(_, c)| *c == 0.0)
            .map(|(e, _)| e)
            .collect();
        ElementBalance {
            strongest,
            weakest,
            missing,
        }
    }
}

/// Summary of an element tally. Ties resolve to the earlier element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementBalance {
    pub strongest: Element,
    pub weakest: Element,
    pub missing: Vec<Element>,
}

/// Weighted element tally of a chart.
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();

    tally.add(pillars.year.stem.element(), BASE_WEIGHT);
    tally.add(pillars.month.stem.element(), BASE_WEIGHT);
    tally.add(pillars.day.stem.element(), DAY_STEM_WEIGHT);
    tally.add(pillars.hour.stem.element(), BASE_WEIGHT);

    tally.add(pillars.year.branch.element(), BASE_WEIGHT);
    tally.add(pillars.month.branch.element(), MONTH_BRANCH_WEIGHT);
    tally.add(pillars.day.branch.element(), BASE_WEIGHT);
    tally.add(pillars.hour.branch.element(), BASE_WEIGHT);

    tally
}
