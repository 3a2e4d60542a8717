//! Sidereal positions and chart derivation.
//!
//! Bridges the [`Ephemeris`] seam with the pure placement math in
//! `milan_vedic_base`: tropical longitudes from the engine, mean nodes and
//! the Lagna computed here, then everything shifted by the ayanamsha.

use milan_core::{Body, Ephemeris};
use milan_time::jd_to_centuries;
use milan_vedic_base::{
    ALL_GRAHAS, AyanamshaModel, GeoLocation, Graha, LunarNode, NakshatraPlacement,
    ayanamsha_deg, lagna_longitude_deg, lunar_node_deg, navamsa_rashi, normalize_360,
    rashi_index,
};

use crate::error::SearchError;
use crate::jyotish_types::{
    Chart, ChartConfig, GrahaLongitudes, RashiBuckets, SiderealBody, SiderealPosition,
};

/// Engine body for a graha, `None` for the nodes.
pub const fn graha_to_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal longitude of one graha.
pub fn graha_sidereal_longitude<E: Ephemeris + ?Sized>(
    engine: &E,
    graha: Graha,
    jd_ut: f64,
    model: AyanamshaModel,
) -> Result<f64, SearchError> {
    let tropical = match graha_to_body(graha) {
        Some(body) => engine.tropical_longitude_deg(body, jd_ut)?,
        None => {
            let node = if graha == Graha::Rahu {
                LunarNode::Rahu
            } else {
                LunarNode::Ketu
            };
            lunar_node_deg(node, jd_to_centuries(jd_ut))
        }
    };
    Ok(normalize_360(tropical - ayanamsha_deg(model, jd_ut)))
}

/// Sidereal longitudes of all nine grahas at a UT Julian Date.
pub fn graha_sidereal_longitudes<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    model: AyanamshaModel,
) -> Result<GrahaLongitudes, SearchError> {
    let mut longitudes = [0.0f64; 9];
    for graha in ALL_GRAHAS {
        longitudes[graha.index() as usize] =
            graha_sidereal_longitude(engine, graha, jd_ut, model)?;
    }
    Ok(GrahaLongitudes { longitudes })
}

/// Sidereal Moon longitude, the input to placement, matching and dasha.
pub fn moon_sidereal_longitude_at<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    model: AyanamshaModel,
) -> Result<f64, SearchError> {
    graha_sidereal_longitude(engine, Graha::Chandra, jd_ut, model)
}

/// Sidereal Ascendant longitude.
pub fn ascendant_sidereal_longitude(
    location: &GeoLocation,
    jd_ut: f64,
    model: AyanamshaModel,
) -> Result<f64, SearchError> {
    let tropical = lagna_longitude_deg(location, jd_ut)?;
    Ok(normalize_360(tropical - ayanamsha_deg(model, jd_ut)))
}

/// Sidereal positions of the chart points selected by `config`.
///
/// The seven classical grahas are always present. The Ascendant needs a
/// location; asking for it without one is an error.
pub fn sidereal_positions<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    location: Option<&GeoLocation>,
    config: &ChartConfig,
) -> Result<Vec<SiderealPosition>, SearchError> {
    let mut positions = Vec::with_capacity(10);
    for graha in ALL_GRAHAS {
        if graha_to_body(graha).is_none() && !config.include_nodes {
            continue;
        }
        positions.push(SiderealPosition {
            body: SiderealBody::from_graha(graha),
            longitude_deg: graha_sidereal_longitude(engine, graha, jd_ut, config.ayanamsha)?,
        });
    }

    if config.include_ascendant {
        let location = location.ok_or_else(|| {
            SearchError::InvalidInput("ascendant requested without a birth location".to_string())
        })?;
        positions.push(SiderealPosition {
            body: SiderealBody::Ascendant,
            longitude_deg: ascendant_sidereal_longitude(location, jd_ut, config.ayanamsha)?,
        });
    }
    Ok(positions)
}

fn empty_buckets() -> RashiBuckets {
    std::array::from_fn(|_| Vec::new())
}

/// Build D1/D9 charts and the Moon placement from computed positions.
///
/// Fails unless the seven classical grahas are all present; the nodes and
/// the Ascendant are optional.
pub fn chart_from_positions(
    jd_ut: f64,
    ayanamsha_deg: f64,
    positions: Vec<SiderealPosition>,
) -> Result<Chart, SearchError> {
    let find = |body: SiderealBody| {
        positions
            .iter()
            .find(|p| p.body == body)
            .map(|p| p.longitude_deg)
            .ok_or_else(|| SearchError::InvalidInput(format!("chart needs {}", body.name())))
    };
    let moon_lon = find(SiderealBody::Moon)?;
    for graha in ALL_GRAHAS {
        if graha_to_body(graha).is_some() {
            find(SiderealBody::from_graha(graha))?;
        }
    }

    let mut d1 = empty_buckets();
    let mut d9 = empty_buckets();
    for p in &positions {
        d1[rashi_index(p.longitude_deg) as usize].push(p.body);
        d9[navamsa_rashi(p.longitude_deg).index() as usize].push(p.body);
    }

    Ok(Chart {
        jd_ut,
        ayanamsha_deg,
        positions,
        d1,
        d9,
        moon: NakshatraPlacement::from_longitude(moon_lon),
        moon_longitude_deg: moon_lon,
        moon_navamsa_rashi: navamsa_rashi(moon_lon),
    })
}

/// Compute a full chart for a UT Julian Date.
pub fn chart_for_jd<E: Ephemeris + ?Sized>(
    engine: &E,
    jd_ut: f64,
    location: Option<&GeoLocation>,
    config: &ChartConfig,
) -> Result<Chart, SearchError> {
    let positions = sidereal_positions(engine, jd_ut, location, config)?;
    chart_from_positions(jd_ut, ayanamsha_deg(config.ayanamsha, jd_ut), positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_core::{EclipticPosition, EngineError, Query};
    use milan_vedic_base::{Nakshatra, Rashi};

    /// Every body at the same fixed tropical longitude.
    struct Fixed(f64);

    impl Ephemeris for Fixed {
        fn position(&self, _query: Query) -> Result<EclipticPosition, EngineError> {
            Ok(EclipticPosition {
                lon_deg: self.0,
                lat_deg: 0.0,
                distance_au: 1.0,
            })
        }
    }

    const J2000: f64 = 2_451_545.0;

    #[test]
    fn sidereal_subtracts_ayanamsha() {
        let lon =
            graha_sidereal_longitude(&Fixed(100.0), Graha::Mangal, J2000, AyanamshaModel::Linear)
                .unwrap();
        assert!((lon - 76.15).abs() < 1e-9, "lon = {lon}");
    }

    #[test]
    fn nodes_come_from_polynomial() {
        let g = graha_sidereal_longitudes(&Fixed(0.0), J2000, AyanamshaModel::Linear).unwrap();
        let rahu = g.longitude(Graha::Rahu);
        let ketu = g.longitude(Graha::Ketu);
        assert!((rahu - (125.044_52 - 23.85)).abs() < 1e-6, "rahu = {rahu}");
        assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn config_controls_points() {
        let config = ChartConfig {
            include_nodes: false,
            include_ascendant: false,
            ..ChartConfig::default()
        };
        let p = sidereal_positions(&Fixed(50.0), J2000, None, &config).unwrap();
        assert_eq!(p.len(), 7);
        assert!(p.iter().all(|x| x.body.graha().is_some_and(|g| g.sapta_index().is_some())));
    }

    #[test]
    fn ascendant_without_location_rejected() {
        let err =
            sidereal_positions(&Fixed(50.0), J2000, None, &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn chart_buckets_hold_every_point() {
        let loc = GeoLocation::new(28.6139, 77.2090).unwrap();
        let chart =
            chart_for_jd(&Fixed(70.0), J2000, Some(&loc), &ChartConfig::default()).unwrap();
        assert_eq!(chart.positions.len(), 10);
        let d1: usize = chart.d1.iter().map(Vec::len).sum();
        let d9: usize = chart.d9.iter().map(Vec::len).sum();
        assert_eq!(d1, 10);
        assert_eq!(d9, 10);
        // Moon at sidereal 46.15°: Rohini, Vrishabha.
        assert_eq!(chart.moon.nakshatra, Nakshatra::Rohini);
        assert_eq!(chart.moon.rashi, Rashi::Vrishabha);
        assert!(chart.d1[1].contains(&SiderealBody::Moon));
    }

    #[test]
    fn chart_without_moon_rejected() {
        let err = chart_from_positions(J2000, 23.85, Vec::new()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));
    }

    #[test]
    fn chart_needs_every_classical_graha() {
        let config = ChartConfig {
            include_nodes: false,
            include_ascendant: false,
            ..ChartConfig::default()
        };
        let full = sidereal_positions(&Fixed(50.0), J2000, None, &config).unwrap();
        assert!(chart_from_positions(J2000, 23.85, full.clone()).is_ok());

        let moon_only: Vec<_> = full
            .iter()
            .copied()
            .filter(|p| p.body == SiderealBody::Moon)
            .collect();
        let err = chart_from_positions(J2000, 23.85, moon_only).unwrap_err();
        assert!(matches!(err, SearchError::InvalidInput(_)));

        let no_mars: Vec<_> = full
            .into_iter()
            .filter(|p| p.body != SiderealBody::Mars)
            .collect();
        let err = chart_from_positions(J2000, 23.85, no_mars).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: chart needs Mars");
    }
}
