//! Reference tables for Ashta Koota matching.
//!
//! All tables are fixed-size arrays indexed by canonical ids: nakshatra
//! 0..=26, rashi 0..=11, sapta graha 0..=6 (Sun, Moon, Mars, Mercury,
//! Jupiter, Venus, Saturn). Typed accessors wrap the raw arrays.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Rashi-indexed tables
// ---------------------------------------------------------------------------

/// Varna rank per rashi. Lower is higher in the varna order.
pub const VARNA: [u8; 12] = [0, 1, 2, 0, 1, 2, 2, 0, 1, 2, 2, 0];

/// Vashya group per rashi.
pub const VASHYA: [u8; 12] = [0, 0, 1, 2, 1, 1, 1, 3, 1, 2, 1, 2];

// ---------------------------------------------------------------------------
// Nakshatra-indexed tables
// ---------------------------------------------------------------------------

/// Yoni (animal) id per nakshatra, 0..=13.
pub const YONI: [u8; 27] = [
    0, 1, 2, 3, 3, 4, 5, 2, 5, 6, 6, 7, 8, 9, 8, 9, 10, 10, 4, 11, 12, 11, 13, 0, 13, 7, 1,
];

/// Sworn enemy of each yoni id.
pub const YONI_ENEMY: [u8; 14] = [8, 13, 11, 12, 10, 6, 5, 9, 0, 7, 4, 2, 3, 1];

/// Animal name of each yoni id.
pub const YONI_NAMES: [&str; 14] = [
    "Horse", "Elephant", "Sheep", "Serpent", "Dog", "Cat", "Rat", "Cow", "Buffalo", "Tiger",
    "Deer", "Monkey", "Mongoose", "Lion",
];

/// Gana per nakshatra: 0 Deva, 1 Manushya, 2 Rakshasa.
pub const GANA: [u8; 27] = [
    0, 1, 2, 1, 0, 1, 0, 0, 2, 2, 1, 1, 0, 2, 0, 2, 0, 2, 2, 1, 1, 0, 2, 2, 1, 1, 0,
];

/// Nadi per nakshatra: 0 Adi, 1 Madhya, 2 Antya.
pub const NADI: [u8; 27] = [
    0, 1, 2, 2, 1, 0, 0, 1, 2, 0, 1, 2, 2, 1, 0, 0, 1, 2, 0, 1, 2, 2, 1, 0, 0, 1, 2,
];

/// Rajju group per nakshatra: 0 Pada, 1 Kati, 2 Nabhi, 3 Kantha, 4 Shiro.
pub const RAJJU: [u8; 27] = [
    0, 1, 2, 3, 4, 3, 2, 1, 0, 0, 1, 2, 3, 4, 3, 2, 1, 0, 0, 1, 2, 3, 4, 3, 2, 1, 0,
];

/// Vedha partner of each nakshatra. The pairing is symmetric; Chitra is
/// its own partner.
pub const VEDHA: [u8; 27] = [
    17, 16, 15, 14, 22, 21, 20, 19, 18, 26, 25, 24, 23, 13, 3, 2, 1, 0, 8, 7, 6, 5, 4, 12, 11, 10,
    9,
];

/// Nakshatras whose same-star pairing does not carry Nadi dosha.
pub const NADI_SAME_STAR_EXCEPTIONS: [Nakshatra; 8] = [
    Nakshatra::Rohini,
    Nakshatra::Ardra,
    Nakshatra::Pushya,
    Nakshatra::Magha,
    Nakshatra::Vishakha,
    Nakshatra::Shravana,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

// ---------------------------------------------------------------------------
// Graha maitri
// ---------------------------------------------------------------------------

/// Planetary friendship points, `MAITRI[a][b]` in SAPTA_GRAHAS order.
#[rustfmt::skip]
pub const MAITRI: [[f64; 7]; 7] = [
    // Sun  Moon Mars Merc Jup  Ven  Sat
    [5.0, 5.0, 5.0, 4.0, 5.0, 0.0, 0.0], // Sun
    [5.0, 5.0, 4.0, 1.0, 4.0, 1.0, 1.0], // Moon
    [5.0, 4.0, 5.0, 0.5, 5.0, 3.0, 0.5], // Mars
    [4.0, 1.0, 0.5, 5.0, 0.5, 5.0, 4.0], // Mercury
    [5.0, 4.0, 5.0, 0.5, 5.0, 0.5, 3.0], // Jupiter
    [0.0, 1.0, 3.0, 5.0, 0.5, 5.0, 5.0], // Venus
    [0.0, 1.0, 0.5, 4.0, 3.0, 5.0, 5.0], // Saturn
];

/// Maitri points at or above which two lords count as friendly.
pub const MAITRI_FRIENDLY_THRESHOLD: f64 = 4.0;

/// Maitri points between two classical grahas. `None` if either is a node.
pub fn graha_maitri(a: Graha, b: Graha) -> Option<f64> {
    Some(MAITRI[a.sapta_index()?][b.sapta_index()?])
}

/// Sapta index of each rashi's lord, in rashi order. Every rashi lord is a
/// classical graha.
pub const RASHI_LORD_SAPTA: [usize; 12] = [2, 5, 3, 1, 0, 3, 5, 2, 4, 6, 6, 4];

/// Maitri points between the lords of two rashis.
pub const fn rashi_maitri(a: Rashi, b: Rashi) -> f64 {
    MAITRI[RASHI_LORD_SAPTA[a.index() as usize]][RASHI_LORD_SAPTA[b.index() as usize]]
}

// ---------------------------------------------------------------------------
// Typed views
// ---------------------------------------------------------------------------

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Gana of a nakshatra.
pub const fn gana(n: Nakshatra) -> Gana {
    match GANA[n.index() as usize] {
        0 => Gana::Deva,
        1 => Gana::Manushya,
        _ => Gana::Rakshasa,
    }
}

/// Pulse type of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

/// Nadi of a nakshatra.
pub const fn nadi(n: Nakshatra) -> Nadi {
    match NADI[n.index() as usize] {
        0 => Nadi::Adi,
        1 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

/// Yoni id of a nakshatra.
pub const fn yoni(n: Nakshatra) -> u8 {
    YONI[n.index() as usize]
}

/// Animal name for a nakshatra's yoni.
pub const fn yoni_name(n: Nakshatra) -> &'static str {
    YONI_NAMES[yoni(n) as usize]
}

/// Whether two yoni ids are sworn enemies.
pub const fn yoni_enemies(a: u8, b: u8) -> bool {
    YONI_ENEMY[(a % 14) as usize] == b
}

/// Rajju group of a nakshatra.
pub const fn rajju_group(n: Nakshatra) -> u8 {
    RAJJU[n.index() as usize]
}

/// Name of a rajju group.
pub const fn rajju_name(group: u8) -> &'static str {
    match group {
        0 => "Pada",
        1 => "Kati",
        2 => "Nabhi",
        3 => "Kantha",
        _ => "Shiro",
    }
}

/// Vedha partner of a nakshatra.
pub const fn vedha_partner(n: Nakshatra) -> Nakshatra {
    Nakshatra::from_index(VEDHA[n.index() as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::rashi_lord;
    use crate::nakshatra::ALL_NAKSHATRAS_27;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn yoni_enmity_is_symmetric() {
        for (a, &b) in YONI_ENEMY.iter().enumerate() {
            assert_eq!(YONI_ENEMY[b as usize] as usize, a);
        }
    }

    #[test]
    fn every_yoni_used_twice_except_mongoose() {
        for id in 0..14u8 {
            let expected = if YONI_NAMES[id as usize] == "Mongoose" { 1 } else { 2 };
            assert_eq!(YONI.iter().filter(|&&y| y == id).count(), expected, "yoni {id}");
        }
    }

    #[test]
    fn vedha_is_symmetric() {
        for n in ALL_NAKSHATRAS_27 {
            assert_eq!(vedha_partner(vedha_partner(n)), n, "{}", n.name());
        }
        let selfish: Vec<_> = ALL_NAKSHATRAS_27
            .iter()
            .filter(|&&n| vedha_partner(n) == n)
            .collect();
        assert_eq!(selfish, vec![&Nakshatra::Chitra]);
    }

    #[test]
    fn gana_counts_nine_each() {
        for g in [Gana::Deva, Gana::Manushya, Gana::Rakshasa] {
            let c = ALL_NAKSHATRAS_27.iter().filter(|&&n| gana(n) == g).count();
            assert_eq!(c, 9, "{}", g.name());
        }
    }

    #[test]
    fn nadi_counts_nine_each() {
        for t in [Nadi::Adi, Nadi::Madhya, Nadi::Antya] {
            let c = ALL_NAKSHATRAS_27.iter().filter(|&&n| nadi(n) == t).count();
            assert_eq!(c, 9, "{}", t.name());
        }
    }

    #[test]
    fn lord_table_matches_rashi_lords() {
        for r in ALL_RASHIS {
            assert_eq!(Some(RASHI_LORD_SAPTA[r.index() as usize]), rashi_lord(r).sapta_index());
        }
        for a in ALL_RASHIS {
            for b in ALL_RASHIS {
                assert_eq!(Some(rashi_maitri(a, b)), graha_maitri(rashi_lord(a), rashi_lord(b)));
            }
        }
    }

    #[test]
    fn maitri_diagonal_is_full() {
        for (i, row) in MAITRI.iter().enumerate() {
            assert!((row[i] - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn maitri_values_in_range() {
        for row in MAITRI {
            for v in row {
                assert!((0.0..=5.0).contains(&v));
            }
        }
    }

    #[test]
    fn node_maitri_is_none() {
        assert_eq!(graha_maitri(Graha::Rahu, Graha::Surya), None);
        assert_eq!(graha_maitri(Graha::Surya, Graha::Shukra), Some(0.0));
    }

    #[test]
    fn aries_leo_lords_friendly() {
        assert!(rashi_maitri(Rashi::Mesha, Rashi::Simha) >= MAITRI_FRIENDLY_THRESHOLD);
    }

    #[test]
    fn rohini_is_serpent() {
        assert_eq!(yoni_name(Nakshatra::Rohini), "Serpent");
        assert_eq!(yoni_name(Nakshatra::Ashwini), "Horse");
        assert!(yoni_enemies(yoni(Nakshatra::Ashwini), yoni(Nakshatra::Hasta)));
    }
}
