//! Types for sidereal positions and derived charts.

use milan_vedic_base::{
    AyanamshaModel, Graha, KujaInputs, MatchParty, NakshatraPlacement, Rashi, rashi_index,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A point placed in a chart: the nine grahas plus the Ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiderealBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

/// All chart points, grahas in traditional order then the Ascendant.
pub const ALL_SIDEREAL_BODIES: [SiderealBody; 10] = [
    SiderealBody::Sun,
    SiderealBody::Moon,
    SiderealBody::Mars,
    SiderealBody::Mercury,
    SiderealBody::Jupiter,
    SiderealBody::Venus,
    SiderealBody::Saturn,
    SiderealBody::Rahu,
    SiderealBody::Ketu,
    SiderealBody::Ascendant,
];

impl SiderealBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Ascendant",
        }
    }

    /// Short label used in chart grids.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mars => "Ma",
            Self::Mercury => "Me",
            Self::Jupiter => "Ju",
            Self::Venus => "Ve",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
            Self::Ascendant => "Asc",
        }
    }

    /// The graha this point is, `None` for the Ascendant.
    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Sun => Some(Graha::Surya),
            Self::Moon => Some(Graha::Chandra),
            Self::Mars => Some(Graha::Mangal),
            Self::Mercury => Some(Graha::Buddh),
            Self::Jupiter => Some(Graha::Guru),
            Self::Venus => Some(Graha::Shukra),
            Self::Saturn => Some(Graha::Shani),
            Self::Rahu => Some(Graha::Rahu),
            Self::Ketu => Some(Graha::Ketu),
            Self::Ascendant => None,
        }
    }

    pub const fn from_graha(graha: Graha) -> Self {
        match graha {
            Graha::Surya => Self::Sun,
            Graha::Chandra => Self::Moon,
            Graha::Mangal => Self::Mars,
            Graha::Buddh => Self::Mercury,
            Graha::Guru => Self::Jupiter,
            Graha::Shukra => Self::Venus,
            Graha::Shani => Self::Saturn,
            Graha::Rahu => Self::Rahu,
            Graha::Ketu => Self::Ketu,
        }
    }
}

impl std::fmt::Display for SiderealBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sidereal longitude of one chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiderealPosition {
    pub body: SiderealBody,
    /// Degrees, [0, 360).
    pub longitude_deg: f64,
}

impl SiderealPosition {
    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(rashi_index(self.longitude_deg))
    }
}

/// Sidereal longitudes of all nine grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaLongitudes {
    /// Indexed by `Graha::index()` (0-8).
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// 0-based rashi index (0-11) of a graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        rashi_index(self.longitude(graha))
    }
}

/// What a chart computation includes beyond the seven classical grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Place Rahu and Ketu.
    pub include_nodes: bool,
    /// Place the Ascendant. Requires a birth location.
    pub include_ascendant: bool,
    pub ayanamsha: AyanamshaModel,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            include_nodes: true,
            include_ascendant: true,
            ayanamsha: AyanamshaModel::Linear,
        }
    }
}

/// Bodies grouped by the rashi they occupy, indexed by rashi.
pub type RashiBuckets = [Vec<SiderealBody>; 12];

/// Birth chart: sidereal positions with their D1 and D9 placements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// UT Julian Date of the chart.
    pub jd_ut: f64,
    /// Ayanamsha applied, degrees.
    pub ayanamsha_deg: f64,
    pub positions: Vec<SiderealPosition>,
    /// Rasi chart: rashi → bodies.
    pub d1: RashiBuckets,
    /// Navamsa chart: navamsa rashi → bodies.
    pub d9: RashiBuckets,
    pub moon: NakshatraPlacement,
    /// Sidereal Moon longitude, degrees.
    pub moon_longitude_deg: f64,
    pub moon_navamsa_rashi: Rashi,
}

impl Chart {
    /// Sidereal longitude of a body, `None` if the chart left it out.
    pub fn longitude(&self, body: SiderealBody) -> Option<f64> {
        self.positions
            .iter()
            .find(|p| p.body == body)
            .map(|p| p.longitude_deg)
    }

    pub fn moon_longitude(&self) -> f64 {
        self.moon_longitude_deg
    }

    /// The chart's side of a match: Moon nakshatra, rashi and navamsa.
    pub fn match_party(&self) -> MatchParty {
        MatchParty::new(self.moon.nakshatra, self.moon.rashi).with_navamsa(self.moon_navamsa_rashi)
    }

    /// Longitudes needed for Kuja Dosha analysis.
    ///
    /// Mars and Venus must be placed; the Ascendant is used when present.
    pub fn kuja_inputs(&self) -> Result<KujaInputs, SearchError> {
        let placed = |body: SiderealBody| {
            self.longitude(body).ok_or_else(|| {
                SearchError::InvalidInput(format!("Kuja Dosha needs {}", body.name()))
            })
        };
        Ok(KujaInputs {
            mars: placed(SiderealBody::Mars)?,
            ascendant: self.longitude(SiderealBody::Ascendant),
            moon: self.moon_longitude_deg,
            venus: placed(SiderealBody::Venus)?,
        })
    }
}
