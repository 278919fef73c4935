//! The five elements (오행), yin/yang polarity, and the generating/controlling
//! relation between elements.
//!
//! Element order is the generating cycle: wood → fire → earth → metal → water.
//! With that order, `(target − source) mod 5` names the relation:
//! 0 same, 1 output (source generates target), 2 wealth (source controls target),
//! 3 official (target controls source), 4 resource (target generates source).

use serde::Serialize;

/// The five elements in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls.
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even indices are yang, odd are yin (stems and branches alike).
    pub const fn from_index(idx: u8) -> Self {
        if idx % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }
}

/// Relation of a target element to a reference (day master) element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ElementRelation {
    /// Same element (비겁).
    Same = 0,
    /// Reference generates target (식상).
    Output = 1,
    /// Reference controls target (재성).
    Wealth = 2,
    /// Target controls reference (관성).
    Official = 3,
    /// Target generates reference (인성).
    Resource = 4,
}

/// `(target − reference + 5) mod 5` as a relation.
pub const fn element_relation(reference: Element, target: Element) -> ElementRelation {
    match (target.index() + 5 - reference.index()) % 5 {
        0 => ElementRelation::Same,
        1 => ElementRelation::Output,
        2 => ElementRelation::Wealth,
        3 => ElementRelation::Official,
        _ => ElementRelation::Resource,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn controlling_pairs() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Water.controls(), Element::Fire);
    }

    #[test]
    fn relations_from_wood() {
        use ElementRelation::*;
        let wood = Element::Wood;
        assert_eq!(element_relation(wood, Element::Wood), Same);
        assert_eq!(element_relation(wood, Element::Fire), Output);
        assert_eq!(element_relation(wood, Element::Earth), Wealth);
        assert_eq!(element_relation(wood, Element::Metal), Official);
        assert_eq!(element_relation(wood, Element::Water), Resource);
    }

    #[test]
    fn relation_agrees_with_cycles() {
        for a in ALL_ELEMENTS {
            assert_eq!(element_relation(a, a.generates()), ElementRelation::Output);
            assert_eq!(element_relation(a, a.controls()), ElementRelation::Wealth);
            assert_eq!(element_relation(a.controls(), a), ElementRelation::Official);
            assert_eq!(element_relation(a.generates(), a), ElementRelation::Resource);
        }
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(9), Polarity::Yin);
    }
}
