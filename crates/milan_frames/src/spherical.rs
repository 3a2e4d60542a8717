//! Cartesian ↔ spherical coordinate conversion.

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the units of the input vector.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// The origin maps to all zeros.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sl, cl) = s.lon_deg.to_radians().sin_cos();
    let (sb, cb) = s.lat_deg.to_radians().sin_cos();
    [s.distance * cb * cl, s.distance * cb * sl, s.distance * sb]
}
