//! Chart derivation and compatibility orchestration over the ephemeris.
//!
//! This crate provides:
//! - Sidereal positions for the nine grahas and the Ascendant
//! - Birth charts with D1 and D9 placements
//! - Running Vimshottari dasha for a birth
//! - Match reports combining Guna Milan, poruthams, Kuja Dosha and dasha
//! - Exhaustive best-match search over all nakshatra padas
//! - Jupiter transit year forecast

pub mod dasha;
pub mod error;
pub mod jyotish;
pub mod jyotish_types;
pub mod match_finder;
pub mod matchmaking;
pub mod transit;

pub use dasha::{dasha_for_birth, dasha_for_chart, dasha_periods_for_birth};
pub use error::SearchError;
pub use jyotish::{
    ascendant_sidereal_longitude, chart_for_jd, chart_from_positions, graha_sidereal_longitude,
    graha_sidereal_longitudes, graha_to_body, moon_sidereal_longitude_at, sidereal_positions,
};
pub use jyotish_types::{
    ALL_SIDEREAL_BODIES, Chart, ChartConfig, GrahaLongitudes, RashiBuckets, SiderealBody,
    SiderealPosition,
};
pub use match_finder::{Gender, MatchCandidate, MatchSearch, SortKey, find_matches, top_matches};
pub use matchmaking::{MatchConfig, MatchReport, PartyDetails, match_charts, match_parties};
pub use transit::{jupiter_rashi_in_year, jupiter_transit_years};
