//! Rashi (zodiac sign) placement and DMS display.
//!
//! Twelve equal signs of 30° starting from Mesha (Aries) at 0° sidereal.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Display label combining both names, e.g. `"Virgo (Kanya)"`.
    pub fn label(self) -> String {
        format!("{} ({})", self.western_name(), self.name())
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The rashi `n` signs onward, counting this one as the 1st.
    pub const fn nth_from(self, n: u8) -> Self {
        Self::from_index((self.index() + (n % 12 + 11) % 12) % 12)
    }

    /// Case-insensitive lookup by Sanskrit or English name.
    pub fn parse(name: &str) -> Option<Self> {
        let needle = name.trim();
        ALL_RASHIS.iter().copied().find(|r| {
            r.name().eq_ignore_ascii_case(needle) || r.western_name().eq_ignore_ascii_case(needle)
        })
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Rashi placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Decimal degrees → DMS. Sign is discarded.
pub fn deg_to_dms(deg: f64) -> Dms {
    let total_seconds = deg.abs() * 3600.0;
    let degrees = (total_seconds / 3600.0).floor();
    let rest = total_seconds - degrees * 3600.0;
    let minutes = (rest / 60.0).floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: rest - minutes * 60.0,
    }
}

/// DMS → decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Index of the rashi containing a sidereal longitude, 0..=11.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    ((normalize_360(sidereal_lon_deg) / RASHI_SPAN).floor() as u8).min(11)
}

/// Rashi placement of a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = rashi_index(lon);
    let degrees_in_rashi = lon - f64::from(idx) * RASHI_SPAN;
    RashiInfo {
        rashi: Rashi::from_index(idx),
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
