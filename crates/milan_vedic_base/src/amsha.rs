//! Navamsa (D9) divisional placement.
//!
//! Each 30° rashi is cut into nine 3°20′ segments. Counting starts from an
//! anchor sign that depends on the element of the natal rashi: fire signs
//! from Mesha, earth from Makara, air from Tula, water from Karka.

use serde::{Deserialize, Serialize};

use crate::rashi::{RASHI_SPAN, Rashi, rashi_index};
use crate::util::normalize_360;

/// Span of one navamsa segment: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

// ---------------------------------------------------------------------------
// Rashi element classification
// ---------------------------------------------------------------------------

/// Element of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl RashiElement {
    /// First navamsa sign for rashis of this element.
    pub const fn navamsa_anchor(self) -> Rashi {
        match self {
            Self::Fire => Rashi::Mesha,
            Self::Earth => Rashi::Makara,
            Self::Air => Rashi::Tula,
            Self::Water => Rashi::Karka,
        }
    }
}

/// Element of a rashi.
///
/// Fire: Mesha, Simha, Dhanu. Earth: Vrishabha, Kanya, Makara.
/// Air: Mithuna, Tula, Kumbha. Water: Karka, Vrischika, Meena.
pub const fn rashi_element(rashi: Rashi) -> RashiElement {
    match rashi.index() % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        _ => RashiElement::Water,
    }
}

// ---------------------------------------------------------------------------
// D9 mapping
// ---------------------------------------------------------------------------

/// Navamsa segment (0..=8) of a longitude within its rashi.
pub fn navamsa_segment(sidereal_lon_deg: f64) -> u8 {
    let in_sign = normalize_360(sidereal_lon_deg) % RASHI_SPAN;
    ((in_sign / NAVAMSA_SPAN).floor() as u8).min(8)
}

/// Navamsa rashi of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    let natal = Rashi::from_index(rashi_index(sidereal_lon_deg));
    let anchor = rashi_element(natal).navamsa_anchor();
    Rashi::from_index(anchor.index() + navamsa_segment(sidereal_lon_deg))
}

/// Longitude in the D9 chart: the navamsa rashi plus the position within
/// the segment stretched ninefold.
pub fn navamsa_longitude(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    let within = (lon % RASHI_SPAN) - f64::from(navamsa_segment(lon)) * NAVAMSA_SPAN;
    let d9 = navamsa_rashi(lon);
    normalize_360(f64::from(d9.index()) * RASHI_SPAN + within.max(0.0) * 9.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_sign_starts_at_aries() {
        assert_eq!(navamsa_rashi(1.0), Rashi::Mesha);
        assert_eq!(navamsa_rashi(121.0), Rashi::Mesha);
        assert_eq!(navamsa_rashi(29.9), Rashi::Dhanu);
    }

    #[test]
    fn earth_sign_starts_at_capricorn() {
        assert_eq!(navamsa_rashi(31.0), Rashi::Makara);
        assert_eq!(navamsa_rashi(45.5), Rashi::Vrishabha);
    }

    #[test]
    fn air_and_water_anchors() {
        assert_eq!(navamsa_rashi(61.0), Rashi::Tula);
        assert_eq!(navamsa_rashi(91.0), Rashi::Karka);
        assert_eq!(navamsa_rashi(359.9), Rashi::Meena);
    }

    #[test]
    fn vargottama_positions() {
        // Every sign has exactly one segment that maps back onto itself.
        for r in 0..12u8 {
            let hits = (0..9u8)
                .filter(|s| {
                    let lon = f64::from(r) * 30.0 + (f64::from(*s) + 0.5) * NAVAMSA_SPAN;
                    navamsa_rashi(lon).index() == r
                })
                .count();
            assert_eq!(hits, 1, "rashi {r}");
        }
    }

    #[test]
    fn d9_longitude_known_values() {
        assert!((navamsa_longitude(5.0) - 45.0).abs() < 1e-9);
        assert!((navamsa_longitude(45.5) - 49.5).abs() < 1e-9);
    }

    #[test]
    fn segment_clamped_at_sign_end() {
        assert_eq!(navamsa_segment(29.999_999_999_9), 8);
    }
}
