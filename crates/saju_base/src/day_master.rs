//! Descriptive traits of the ten day masters (일간).

use serde::Serialize;

use crate::stem::Stem;

/// Presentational descriptor for one day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMasterTraits {
    pub stem: Stem,
    /// Nature image of the stem, e.g. "큰 나무 (a tall tree)".
    pub metaphor: &'static str,
    pub traits: &'static str,
    pub advice: &'static str,
}

const TRAITS: [DayMasterTraits; 10] = [
    DayMasterTraits {
        stem: Stem::Gap,
        metaphor: "큰 나무 (a tall tree)",
        traits: "Upright and principled, grows steadily toward a goal and takes the lead.",
        advice: "Bend a little in strong wind; stubbornness breaks what flexibility keeps.",
    },
    DayMasterTraits {
        stem: Stem::Eul,
        metaphor: "화초와 덩굴 (flowers and vines)",
        traits: "Adaptable and persistent, finds a way around obstacles and reads people well.",
        advice: "Choose what to lean on with care and trust your own roots.",
    },
    DayMasterTraits {
        stem: Stem::Byeong,
        metaphor: "태양 (the sun)",
        traits: "Warm, open and generous, lights up a room and inspires others.",
        advice: "Pace your energy; constant shining leaves no time to recharge.",
    },
    DayMasterTraits {
        stem: Stem::Jeong,
        metaphor: "촛불 (a candle flame)",
        traits: "Attentive and refined, a quiet warmth that guides those nearby.",
        advice: "Guard your flame from draughts; not every worry needs your light.",
    },
    DayMasterTraits {
        stem: Stem::Mu,
        metaphor: "큰 산 (a great mountain)",
        traits: "Steady and trustworthy, a dependable center that others gather around.",
        advice: "Stillness is strength, but move when the season calls for it.",
    },
    DayMasterTraits {
        stem: Stem::Gi,
        metaphor: "기름진 논밭 (fertile fields)",
        traits: "Nurturing and practical, patient in cultivating people and projects.",
        advice: "Tend your own field too; giving everything away leaves it fallow.",
    },
    DayMasterTraits {
        stem: Stem::Gyeong,
        metaphor: "무쇠와 바위 (raw iron and rock)",
        traits: "Decisive and loyal, values justice and acts without hesitation.",
        advice: "Let yourself be tempered; sharp edges cut friends as well as foes.",
    },
    DayMasterTraits {
        stem: Stem::Sin,
        metaphor: "보석 (a polished jewel)",
        traits: "Precise and elegant, with high standards and a keen sense of worth.",
        advice: "Perfection is not the price of being valued; allow small flaws.",
    },
    DayMasterTraits {
        stem: Stem::Im,
        metaphor: "큰 강과 바다 (a great river and sea)",
        traits: "Broad-minded and resourceful, carries ideas far and embraces change.",
        advice: "Keep your banks; boundless flow scatters strength.",
    },
    DayMasterTraits {
        stem: Stem::Gye,
        metaphor: "이슬과 빗물 (dew and rain)",
        traits: "Perceptive and gentle, quietly nourishes and sees what others miss.",
        advice: "Speak up; a soft voice still deserves to be heard.",
    },
];

/// Traits entry for a day master.
pub fn day_master_traits(day_master: Stem) -> &'static DayMasterTraits {
    &TRAITS[day_master.index() as usize]
}
