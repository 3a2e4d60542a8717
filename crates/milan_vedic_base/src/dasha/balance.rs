//! Birth balance: how much of the first mahadasha remains at birth.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance_years, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index of the Moon's nakshatra
/// - `balance_years`: remaining years of the starting lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed, [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_years: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN_27;
    let balance_years = entry_period_years * (1.0 - elapsed_fraction);
    (nak_idx, balance_years, elapsed_fraction)
}
