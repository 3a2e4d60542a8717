//! Vedic placement math and Guna Milan compatibility rules.
//!
//! This crate provides:
//! - Ayanamsha, rashi, nakshatra/pada and navamsa (D9) placement
//! - Mean lunar nodes and the Lagna (Ascendant)
//! - The eight-koota Guna Milan scorer with Dosha Bhanga cancellations,
//!   Rajju and Vedha checks, and the supplementary poruthams
//! - Kuja Dosha analysis
//! - Vimshottari dasha periods
//! - Gochara (transit) timing helpers
//!
//! Everything here is a pure function of its inputs and the constant
//! reference tables in [`koota_tables`].

pub mod amsha;
pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod gochara;
pub mod graha;
pub mod guna_milan;
pub mod koota_tables;
pub mod kuja_dosha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod porutham;
pub mod rashi;
pub mod util;

pub use amsha::{
    NAVAMSA_SPAN, RashiElement, navamsa_longitude, navamsa_rashi, navamsa_segment, rashi_element,
};
pub use ayanamsha::{
    AYANAMSHA_J2000_DEG, AYANAMSHA_RATE_DEG_PER_YEAR, AyanamshaModel, ayanamsha_deg,
    tropical_to_sidereal,
};
pub use dasha::{
    CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTone, VIMSHOTTARI_SEQUENCE,
    VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, antardashas, current_dasha,
    nakshatra_birth_balance, starting_lord, vimshottari_level0, vimshottari_years,
};
pub use error::VedicError;
pub use gochara::{
    JUPITER_FAVOURABLE_HOUSES, JupiterYear, SUN_TRANSIT_WINDOWS, YearRating,
    jupiter_house_rating, wedding_month_window,
};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use guna_milan::{
    ALL_KOOTAS, CancellationEntry, GunaMilanResult, Koota, KootaResult, MAX_GUNA_POINTS,
    MatchParty, RISKY_TOTAL_THRESHOLD, RajjuStatus, SafetyFlag, VedhaStatus, guna_milan,
};
pub use koota_tables::{Gana, Nadi, graha_maitri, rashi_maitri};
pub use kuja_dosha::{
    ALL_KUJA_REFERENCES, KujaAnalysis, KujaCheck, KujaDetail, KujaInputs, KujaReference,
    KujaState, KujaStatus, analyze_kuja_dosha, kuja_from_reference,
};
pub use lagna::{GeoLocation, lagna_longitude_deg, lagna_longitude_rad, mc_longitude_rad};
pub use lunar_nodes::{ALL_NODES, LunarNode, lunar_node_deg, mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, NakshatraPlacement,
    PADA_SPAN, nakshatra_from_longitude, pada_midpoint_longitude, rashis_for_nakshatra,
};
pub use porutham::{
    EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MAHENDRA_COUNTS, Poruthams, StreeDeergha, Verdict,
    mahendra, poruthams, stree_deergha, verdict,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_index,
};
pub use util::normalize_360;
