//! Vedic planet (graha) enum and rashi lordship.
//!
//! Each rashi is ruled by one of the seven classical grahas; Rahu and Ketu
//! rule no sign but take part in the Vimshottari sequence.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas). Their order is the row/column
/// order of the maitri table.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Index into SAPTA_GRAHAS, `None` for the nodes.
    pub const fn sapta_index(self) -> Option<usize> {
        match self {
            Self::Rahu | Self::Ketu => None,
            other => Some(other.index() as usize),
        }
    }

    /// Case-insensitive lookup by Sanskrit or English name.
    pub fn parse(name: &str) -> Option<Self> {
        let needle = name.trim();
        ALL_GRAHAS.iter().copied().find(|g| {
            g.name().eq_ignore_ascii_case(needle) || g.english_name().eq_ignore_ascii_case(needle)
        })
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Lord of each rashi, indexed by rashi.
const RASHI_LORDS: [Graha; 12] = [
    Graha::Mangal,  // Mesha
    Graha::Shukra,  // Vrishabha
    Graha::Buddh,   // Mithuna
    Graha::Chandra, // Karka
    Graha::Surya,   // Simha
    Graha::Buddh,   // Kanya
    Graha::Shukra,  // Tula
    Graha::Mangal,  // Vrischika
    Graha::Guru,    // Dhanu
    Graha::Shani,   // Makara
    Graha::Shani,   // Kumbha
    Graha::Guru,    // Meena
];

/// Planetary lord of a rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    RASHI_LORDS[rashi.index() as usize]
}
