//! Error types for the facade and its external collaborators.

use std::error::Error;
use std::fmt::{Display, Formatter};

use milan_core::EngineError;
use milan_search::SearchError;
use milan_time::TimeError;
use milan_vedic_base::VedicError;

/// Facade error: everything a chart or match request can fail with.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MilanError {
    Engine(EngineError),
    Time(TimeError),
    Vedic(VedicError),
    Search(SearchError),
    /// Malformed request, rejected before any computation.
    InvalidInput(String),
}

impl Display for MilanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Vedic(e) => write!(f, "vedic error: {e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for MilanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<EngineError> for MilanError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<TimeError> for MilanError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for MilanError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<SearchError> for MilanError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Geocoding / timezone lookup failure. Never fatal to a chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The place could not be found.
    NotFound(String),
    /// The lookup service failed or timed out.
    Unavailable(String),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(place) => write!(f, "place not found: {place}"),
            Self::Unavailable(msg) => write!(f, "resolver unavailable: {msg}"),
        }
    }
}

impl Error for ResolveError {}

/// Narrative generation failure. Never fatal to scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NarrativeError {
    /// Usage quota of the text service exhausted.
    QuotaExceeded,
    /// Network or service failure.
    Unavailable(String),
    /// The service answered with nothing usable.
    EmptyResponse,
}

impl Display for NarrativeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded => f.write_str("narrative quota exceeded"),
            Self::Unavailable(msg) => write!(f, "narrative service unavailable: {msg}"),
            Self::EmptyResponse => f.write_str("narrative service returned no text"),
        }
    }
}

impl Error for NarrativeError {}
