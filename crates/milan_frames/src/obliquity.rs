//! Mean obliquity of the ecliptic at J2000.0.
//!
//! ε₀ = 84381.406″ (IAU 2006) = 23.4392911°.

/// J2000 mean obliquity in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// J2000 mean obliquity in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;
