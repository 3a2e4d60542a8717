//! Analytic ephemeris engine.
//!
//! This crate provides the [`Engine`] that evaluates geocentric ecliptic
//! positions of the Sun, Moon and the five classical planets from
//! closed-form theories:
//!
//! - planets: Keplerian mean elements with secular rates ([`elements`]),
//!   heliocentric → geocentric by subtracting the Earth–Moon barycentre
//! - Moon: truncated lunar series ([`lunar`])
//!
//! Results are tropical longitudes on the mean equinox of date. Computed
//! points (lunar nodes, ascendant) belong to `milan_vedic_base`.
//!
//! The [`Ephemeris`] trait is the seam downstream crates depend on, so a
//! higher-precision backend can be substituted without touching them.

pub mod elements;
pub mod lunar;

use std::error::Error;
use std::fmt::{Display, Formatter};

use milan_frames::{cartesian_to_spherical, precess_longitude_from_j2000};
use milan_time::{calendar_to_jd, jd_to_centuries};

use crate::elements::KeplerElements;

const KM_PER_AU: f64 = 149_597_870.7;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Convergence threshold for Kepler's equation (radians).
    pub kepler_tolerance_rad: f64,
    /// Iteration cap for Kepler's equation.
    pub max_kepler_iterations: u32,
    /// Earliest accepted Julian Date.
    pub min_jd: f64,
    /// Latest accepted Julian Date.
    pub max_jd: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kepler_tolerance_rad: 1e-12,
            max_kepler_iterations: 30,
            min_jd: calendar_to_jd(1000, 1, 1.0),
            max_jd: calendar_to_jd(3000, 1, 1.0),
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if !(self.kepler_tolerance_rad.is_finite() && self.kepler_tolerance_rad > 0.0) {
            return Err(EngineError::InvalidConfig(
                "kepler_tolerance_rad must be positive and finite",
            ));
        }
        if self.max_kepler_iterations == 0 {
            return Err(EngineError::InvalidConfig(
                "max_kepler_iterations must be greater than zero",
            ));
        }
        if !(self.min_jd.is_finite() && self.max_jd.is_finite() && self.min_jd < self.max_jd) {
            return Err(EngineError::InvalidConfig("min_jd must be below max_jd"));
        }
        Ok(())
    }
}

/// Physical bodies the engine can position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies, in the order above.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Heliocentric elements, `None` for the Sun and Moon.
    fn elements(self) -> Option<&'static KeplerElements> {
        match self {
            Self::Mercury => Some(&elements::MERCURY),
            Self::Venus => Some(&elements::VENUS),
            Self::Mars => Some(&elements::MARS),
            Self::Jupiter => Some(&elements::JUPITER),
            Self::Saturn => Some(&elements::SATURN),
            Self::Sun | Self::Moon => None,
        }
    }
}

/// Single ephemeris request. `jd` is a UT Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub body: Body,
    pub jd: f64,
}

/// Geocentric ecliptic position, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Tropical longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in au.
    pub distance_au: f64,
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    InvalidQuery(&'static str),
    EpochOutOfRange { jd: f64 },
    NoConvergence(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// Source of geocentric tropical positions.
///
/// Implemented by [`Engine`]; tests and alternative backends can provide
/// their own.
pub trait Ephemeris: Send + Sync {
    fn position(&self, query: Query) -> Result<EclipticPosition, EngineError>;

    /// Tropical longitude in degrees, [0, 360).
    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, EngineError> {
        Ok(self.position(Query { body, jd })?.lon_deg)
    }
}

/// Analytic ephemeris engine.
///
/// Stateless apart from its configuration; `Engine` is [`Send`] + [`Sync`]
/// and can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn heliocentric(&self, el: &KeplerElements, t: f64) -> Result<[f64; 3], EngineError> {
        elements::heliocentric_j2000(
            el,
            t,
            self.config.kepler_tolerance_rad,
            self.config.max_kepler_iterations,
        )
    }

    fn check_epoch(&self, jd: f64) -> Result<(), EngineError> {
        if !jd.is_finite() {
            return Err(EngineError::InvalidQuery("jd must be finite"));
        }
        if jd < self.config.min_jd || jd > self.config.max_jd {
            return Err(EngineError::EpochOutOfRange { jd });
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl Ephemeris for Engine {
    fn position(&self, query: Query) -> Result<EclipticPosition, EngineError> {
        self.check_epoch(query.jd)?;
        let t = jd_to_centuries(query.jd);

        if query.body == Body::Moon {
            let moon = lunar::moon_position(query.jd);
            return Ok(EclipticPosition {
                lon_deg: moon.lon_deg,
                lat_deg: moon.lat_deg,
                distance_au: moon.distance_km / KM_PER_AU,
            });
        }

        let earth = self.heliocentric(&elements::EARTH_MOON_BARY, t)?;
        let geo = match query.body.elements() {
            Some(el) => {
                let p = self.heliocentric(el, t)?;
                [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
            }
            None => [-earth[0], -earth[1], -earth[2]],
        };

        let s = cartesian_to_spherical(&geo);
        Ok(EclipticPosition {
            lon_deg: precess_longitude_from_j2000(s.lon_deg, t),
            lat_deg: s.lat_deg,
            distance_au: s.distance,
        })
    }
}

// Compile-time guarantee that Engine can be shared across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
};
