//! General precession in ecliptic longitude.
//!
//! Mean-element theories give positions referred to the fixed J2000
//! ecliptic and equinox. Adding the accumulated precession p_A moves a
//! longitude onto the mean equinox of date, which is what tropical
//! astrology and the ayanamsha expect.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// Accumulated general precession in longitude, arcseconds.
///
/// `t` is Julian centuries since J2000.0. Positive for epochs after J2000.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))))
}

/// Accumulated general precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Longitude on the J2000 ecliptic → longitude on the mean equinox of date.
///
/// Ignores the small motion of the ecliptic itself (< 1″/century in longitude
/// for bodies near the ecliptic). Result in [0, 360).
pub fn precess_longitude_from_j2000(lon_j2000_deg: f64, t: f64) -> f64 {
    (lon_j2000_deg + general_precession_longitude_deg(t)).rem_euclid(360.0)
}
