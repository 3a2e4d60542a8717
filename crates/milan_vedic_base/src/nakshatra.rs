//! Nakshatra (lunar mansion) and pada placement.
//!
//! The ecliptic is divided into 27 nakshatras of 13°20′, each split into
//! four padas of 3°20′. Nine padas make one rashi, so every pada lies
//! wholly inside a single sign; a nakshatra straddles two signs when its
//! padas do.

use serde::{Deserialize, Serialize};

use crate::rashi::{Rashi, rashi_index};
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra for a 0-based index, wrapping modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS_27[(index % 27) as usize]
    }

    /// Start longitude of the nakshatra.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * NAKSHATRA_SPAN_27
    }

    /// Case-insensitive lookup; spaces are ignored (`"purva phalguni"`,
    /// `"PurvaPhalguni"`). `"Dhanishta"` is accepted as a spelling variant.
    pub fn parse(name: &str) -> Option<Self> {
        let squash = |s: &str| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let needle = squash(name);
        if needle == "dhanishta" {
            return Some(Self::Dhanishtha);
        }
        ALL_NAKSHATRAS_27
            .iter()
            .copied()
            .find(|n| squash(n.name()) == needle)
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a 27-nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_traversed: f64,
}

/// Nakshatra and pada of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - f64::from(idx) * NAKSHATRA_SPAN_27).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: Nakshatra::from_index(idx),
        pada,
        degrees_in_nakshatra,
        fraction_traversed: degrees_in_nakshatra / NAKSHATRA_SPAN_27,
    }
}

/// Moon placement used throughout matching: nakshatra, rashi and pada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub nakshatra: Nakshatra,
    pub rashi: Rashi,
    /// 1..=4
    pub pada: u8,
}

impl NakshatraPlacement {
    /// Placement of a sidereal longitude.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let info = nakshatra_from_longitude(sidereal_lon_deg);
        Self {
            nakshatra: info.nakshatra,
            rashi: Rashi::from_index(rashi_index(sidereal_lon_deg)),
            pada: info.pada,
        }
    }

    /// Placement of a (nakshatra, pada) pair; the rashi follows from the pada.
    ///
    /// Returns `None` if `pada` is not 1..=4.
    pub fn from_pada(nakshatra: Nakshatra, pada: u8) -> Option<Self> {
        pada_midpoint_longitude(nakshatra, pada).map(Self::from_longitude)
    }
}

/// Longitude at the middle of a pada.
///
/// Returns `None` if `pada` is not 1..=4.
pub fn pada_midpoint_longitude(nakshatra: Nakshatra, pada: u8) -> Option<f64> {
    if !(1..=4).contains(&pada) {
        return None;
    }
    Some(nakshatra.start_deg() + f64::from(pada - 1) * PADA_SPAN + PADA_SPAN / 2.0)
}

/// The one or two rashis a nakshatra's padas fall in, in zodiac order.
pub fn rashis_for_nakshatra(nakshatra: Nakshatra) -> Vec<Rashi> {
    let mut out: Vec<Rashi> = Vec::with_capacity(2);
    for p in (1..=4u8).filter_map(|pada| NakshatraPlacement::from_pada(nakshatra, pada)) {
        if !out.contains(&p.rashi) {
            out.push(p.rashi);
        }
    }
    out
}
