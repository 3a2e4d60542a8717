//! Jupiter transit forecast for wedding timing.

use milan_core::Ephemeris;
use milan_time::calendar_to_jd;
use milan_vedic_base::{AyanamshaModel, Graha, JupiterYear, Rashi, rashi_index};

use crate::error::SearchError;
use crate::jyotish::graha_sidereal_longitude;

/// Month and day at which each year's Jupiter position is sampled.
pub const TRANSIT_SAMPLE_MONTH: u32 = 7;
pub const TRANSIT_SAMPLE_DAY: f64 = 1.0;

/// Jupiter's sidereal rashi on 1 July of `year`, 0h UT.
pub fn jupiter_rashi_in_year<E: Ephemeris + ?Sized>(
    engine: &E,
    year: i32,
    model: AyanamshaModel,
) -> Result<Rashi, SearchError> {
    let jd = calendar_to_jd(year, TRANSIT_SAMPLE_MONTH, TRANSIT_SAMPLE_DAY);
    let lon = graha_sidereal_longitude(engine, Graha::Guru, jd, model)?;
    Ok(Rashi::from_index(rashi_index(lon)))
}

/// Rate each year by Jupiter's house from the Moon sign.
pub fn jupiter_transit_years<E: Ephemeris + ?Sized>(
    engine: &E,
    moon_rashi: Rashi,
    years: impl IntoIterator<Item = i32>,
    model: AyanamshaModel,
) -> Result<Vec<JupiterYear>, SearchError> {
    years
        .into_iter()
        .map(|year| {
            let jupiter = jupiter_rashi_in_year(engine, year, model)?;
            Ok(JupiterYear::new(year, moon_rashi, jupiter))
        })
        .collect()
}
