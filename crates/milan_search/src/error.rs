//! Error types for chart and match orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use milan_core::EngineError;
use milan_time::TimeError;
use milan_vedic_base::VedicError;

/// Errors from chart derivation, matching and search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris engine.
    Engine(EngineError),
    /// Error from Vedic placement math.
    Vedic(VedicError),
    /// Error from time conversion.
    Time(TimeError),
    /// Caller-supplied value outside its domain.
    InvalidInput(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::Vedic(e) => write!(f, "vedic error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<EngineError> for SearchError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
