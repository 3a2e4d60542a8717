//! Dasha orchestration: bridges the ephemeris engine with the pure-math
//! Vimshottari computation in `milan_vedic_base`.

use milan_core::Ephemeris;
use milan_vedic_base::{
    AyanamshaModel, CurrentDasha, DashaPeriod, current_dasha, vimshottari_level0,
};

use crate::error::SearchError;
use crate::jyotish::moon_sidereal_longitude_at;
use crate::jyotish_types::Chart;

/// Mahadashas from birth, one full 120-year round.
pub fn dasha_periods_for_birth<E: Ephemeris + ?Sized>(
    engine: &E,
    birth_jd: f64,
    model: AyanamshaModel,
) -> Result<Vec<DashaPeriod>, SearchError> {
    let moon = moon_sidereal_longitude_at(engine, birth_jd, model)?;
    Ok(vimshottari_level0(birth_jd, moon))
}

/// Running mahadasha and antardasha at `query_jd` for a birth instant.
pub fn dasha_for_birth<E: Ephemeris + ?Sized>(
    engine: &E,
    birth_jd: f64,
    query_jd: f64,
    model: AyanamshaModel,
) -> Result<CurrentDasha, SearchError> {
    let moon = moon_sidereal_longitude_at(engine, birth_jd, model)?;
    Ok(current_dasha(birth_jd, moon, query_jd)?)
}

/// Running period for an already computed birth chart.
pub fn dasha_for_chart(chart: &Chart, query_jd: f64) -> Result<CurrentDasha, SearchError> {
    Ok(current_dasha(chart.jd_ut, chart.moon_longitude(), query_jd)?)
}
