//! Convenience facade for birth charts and Guna Milan matching.
//!
//! Wraps the engine, chart, scoring and search crates behind a small set of
//! functions that take validated [`BirthProfile`]s. External collaborators
//! (place lookup, narrative text) plug in through [`PlaceResolver`] and
//! [`Narrator`]; neither can fail a score.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use milan_rs::*;
//!
//! let engine = Engine::default();
//! let boy = BirthProfile::from_parts("Boy", 1990, 1, 1, 6, 0, 5.5, 28.61, 77.21)?;
//! let girl = BirthProfile::from_parts("Girl", 1992, 4, 12, 5, 30, 5.5, 28.61, 77.21)?;
//! let report = match_profiles(
//!     &engine,
//!     &boy,
//!     &girl,
//!     &ChartConfig::default(),
//!     &MatchConfig::default(),
//! )?;
//! println!("{:.1}/36 {}", report.final_total, report.verdict);
//! ```

pub mod convenience;
pub mod error;
pub mod narrative;
pub mod profile;
pub mod resolver;

pub use convenience::{
    analyze_kuja_dosha, compute_chart, current_dasha, find_best_matches, kuja_dosha_details,
    marriage_years, match_profiles, score_match, wedding_month,
};
pub use error::{MilanError, NarrativeError, ResolveError};
pub use narrative::{Narrative, Narrator, generate_narrative, report_summary};
pub use profile::{BirthProfile, parse_local};
pub use resolver::{
    CachedResolver, Place, PlaceResolver, ResolvedOffset, ResolverConfig, resolve_offset,
};

// Re-export the types callers need so they can depend on this crate alone.
pub use milan_core::{Engine, EngineConfig, Ephemeris};
pub use milan_search::{
    Chart, ChartConfig, Gender, MatchCandidate, MatchConfig, MatchReport, PartyDetails,
    SiderealBody, SiderealPosition, SortKey, top_matches,
};
pub use milan_time::BirthMoment;
pub use milan_vedic_base::{
    ALL_KOOTAS, ALL_NAKSHATRAS_27, ALL_RASHIS, AyanamshaModel, CurrentDasha, DashaTone,
    GeoLocation, Graha, JupiterYear, Koota, KootaResult, KujaAnalysis, KujaStatus, Nakshatra,
    NakshatraPlacement, RajjuStatus, Rashi, SafetyFlag, VedhaStatus, Verdict, YearRating,
};
