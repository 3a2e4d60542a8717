//! Error types for civil-time validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar or civil-time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a real calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second outside a civil clock.
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// UTC offset not finite or beyond ±14 hours.
    InvalidOffset(f64),
    /// Julian Date not representable as a calendar instant.
    InvalidJulianDate(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "invalid time: {hour:02}:{minute:02}:{second:02}"),
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset: {h} hours"),
            Self::InvalidJulianDate(jd) => write!(f, "invalid Julian Date: {jd}"),
        }
    }
}

impl Error for TimeError {}
