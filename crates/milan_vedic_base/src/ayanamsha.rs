//! Ayanamsha: the offset between the tropical and sidereal zodiacs.
//!
//! The default model is a linear Lahiri approximation,
//! `23.85° + 0.01396°/yr × (years since J2000)`, with years measured in
//! Julian years from J2000.0. This is good to a few arcminutes over the
//! 20th and 21st centuries, well inside a 3°20′ pada.
//!
//! [`AyanamshaModel::Precessional`] anchors the same J2000 value but
//! advances it with the IAU 2006 general precession instead of a constant
//! rate.

use milan_frames::general_precession_longitude_deg;
use milan_time::{jd_to_centuries, jd_to_julian_years};
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Ayanamsha at J2000.0 in degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.85;

/// Linear drift of the ayanamsha, degrees per Julian year.
pub const AYANAMSHA_RATE_DEG_PER_YEAR: f64 = 0.01396;

/// How the ayanamsha advances away from J2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AyanamshaModel {
    /// Constant rate of 0.01396°/yr.
    #[default]
    Linear,
    /// IAU 2006 general precession in longitude.
    Precessional,
}

impl AyanamshaModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Precessional => "precessional",
        }
    }
}

/// Ayanamsha in degrees at a Julian Date.
pub fn ayanamsha_deg(model: AyanamshaModel, jd: f64) -> f64 {
    match model {
        AyanamshaModel::Linear => {
            AYANAMSHA_J2000_DEG + AYANAMSHA_RATE_DEG_PER_YEAR * jd_to_julian_years(jd)
        }
        AyanamshaModel::Precessional => {
            AYANAMSHA_J2000_DEG + general_precession_longitude_deg(jd_to_centuries(jd))
        }
    }
}

/// Tropical longitude → sidereal longitude in [0, 360).
pub fn tropical_to_sidereal(tropical_deg: f64, model: AyanamshaModel, jd: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg(model, jd))
}
