//! Vimshottari dasha (planetary period) calculations.
//!
//! - [`balance`]: unexpired part of the first period at birth
//! - [`vimshottari`]: mahadashas, antardashas and the running period
//! - [`types`]: shared period types and tones

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTone};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, antardashas, current_dasha,
    starting_lord, vimshottari_level0, vimshottari_years,
};
