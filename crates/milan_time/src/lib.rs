//! Time handling for birth-chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Julian centuries / Julian years since J2000.0
//! - Earth Rotation Angle, GMST and local sidereal time
//! - [`BirthMoment`]: a validated local civil time plus UTC offset,
//!   convertible to a UT Julian Date
//!
//! The engine treats UT as equivalent to TT; the ~1 minute difference is
//! far below the resolution of nakshatra and rashi placement.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{BirthMoment, MAX_UTC_OFFSET_HOURS, jd_from_naive_utc, naive_utc_from_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, jd_to_julian_years,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
