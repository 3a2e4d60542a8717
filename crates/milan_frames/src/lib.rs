//! Frame helpers for analytic ephemeris computations.
//!
//! Provides the J2000 mean obliquity, the general precession in longitude
//! (J2000 ecliptic → ecliptic of date) and Cartesian ↔ spherical conversion.

pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_longitude_from_j2000,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
