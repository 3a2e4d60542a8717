//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! rising point and the meridian, using the J2000 mean obliquity.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger.

use std::f64::consts::TAU;

use milan_frames::OBLIQUITY_J2000_RAD;
use milan_time::local_sidereal_time_rad;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location of a birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), VedicError> {
        if !(self.latitude_deg.is_finite() && (-90.0..=90.0).contains(&self.latitude_deg)) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(self.longitude_deg.is_finite() && (-180.0..=180.0).contains(&self.longitude_deg)) {
            return Err(VedicError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Ecliptic longitude of the Lagna (Ascendant) in radians, [0, 2π).
///
/// `Asc = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))` with θ the local
/// sidereal time. The more common `atan2(−cos θ, …)` spelling yields the
/// descending point; the signs here pick the eastern intersection.
///
/// Latitudes at the poles are rejected since the horizon and ecliptic
/// degenerate there.
pub fn lagna_longitude_rad(location: &GeoLocation, jd_ut: f64) -> Result<f64, VedicError> {
    location.validate()?;
    if location.latitude_deg.abs() >= 89.999 {
        return Err(VedicError::InvalidLocation("ascendant undefined at the poles"));
    }
    let lst = local_sidereal_time_rad(jd_ut, location.longitude_deg);
    let eps = OBLIQUITY_J2000_RAD;
    let phi = location.latitude_rad();

    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    Ok(asc.rem_euclid(TAU))
}

/// Ecliptic longitude of the MC (Midheaven) in radians, [0, 2π).
///
/// `MC = atan2(sin θ, cos θ cos ε)`
pub fn mc_longitude_rad(location: &GeoLocation, jd_ut: f64) -> Result<f64, VedicError> {
    location.validate()?;
    let lst = local_sidereal_time_rad(jd_ut, location.longitude_deg);
    let mc = f64::atan2(lst.sin(), lst.cos() * OBLIQUITY_J2000_RAD.cos());
    Ok(mc.rem_euclid(TAU))
}

/// Tropical Ascendant in degrees, [0, 360).
pub fn lagna_longitude_deg(location: &GeoLocation, jd_ut: f64) -> Result<f64, VedicError> {
    Ok(lagna_longitude_rad(location, jd_ut)?.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_time::{J2000_JD, gmst_rad};

    /// A UT instant at which Greenwich sidereal time is (nearly) zero.
    fn jd_with_zero_gmst() -> f64 {
        // GMST advances ~360.9856° per day; step back to the zero crossing.
        let g = gmst_rad(J2000_JD).to_degrees();
        J2000_JD - g / 360.985_647_366_29
    }

    #[test]
    fn equator_at_zero_lst_rises_cancer() {
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        let asc = lagna_longitude_deg(&loc, jd_with_zero_gmst()).unwrap();
        assert!((asc - 90.0).abs() < 0.01, "asc = {asc}");
    }

    #[test]
    fn mc_at_zero_lst_is_aries_point() {
        let loc = GeoLocation::new(0.0, 0.0).unwrap();
        let mc = mc_longitude_rad(&loc, jd_with_zero_gmst()).unwrap().to_degrees();
        assert!(mc < 0.01 || mc > 359.99, "mc = {mc}");
    }

    #[test]
    fn ascendant_leads_mc_by_a_quadrant_or_so() {
        // The ascendant lies east of the MC, between 0° and 180° ahead.
        let loc = GeoLocation::new(28.61, 77.21).unwrap();
        for i in 0..24 {
            let jd = 2_447_892.5 + f64::from(i) / 24.0;
            let asc = lagna_longitude_rad(&loc, jd).unwrap().to_degrees();
            let mc = mc_longitude_rad(&loc, jd).unwrap().to_degrees();
            let lead = (asc - mc).rem_euclid(360.0);
            assert!(lead > 0.0 && lead < 180.0, "hour {i}: asc {asc} mc {mc}");
        }
    }

    #[test]
    fn delhi_morning_1990() {
        // 1990-01-01 06:00 IST = 00:30 UT.
        let loc = GeoLocation::new(28.6139, 77.209).unwrap();
        let asc = lagna_longitude_deg(&loc, 2_447_892.520_833).unwrap();
        assert!((asc - 262.27).abs() < 0.5, "asc = {asc}");
    }

    #[test]
    fn rejects_bad_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        let pole = GeoLocation {
            latitude_deg: 90.0,
            longitude_deg: 0.0,
        };
        assert!(lagna_longitude_rad(&pole, J2000_JD).is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        assert!(matches!(
            GeoLocation::new(0.0, 200.0),
            Err(VedicError::InvalidLocation(_))
        ));
    }
}
