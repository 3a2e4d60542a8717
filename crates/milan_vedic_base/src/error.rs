//! Error type for the pure-math Vedic layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected inputs. Nothing in this crate touches the ephemeris, so every
/// failure is a caller-supplied value outside its domain.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Latitude or longitude out of range.
    InvalidLocation(&'static str),
    InvalidInput(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {}
