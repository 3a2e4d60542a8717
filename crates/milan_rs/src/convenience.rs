//! One-call entry points over the chart, scoring, dasha and search layers.

use milan_core::Ephemeris;
use milan_search::{
    Chart, ChartConfig, Gender, MatchCandidate, MatchConfig, MatchReport, MatchSearch, SortKey,
    chart_for_jd, dasha_for_chart, find_matches, jupiter_transit_years, match_charts,
};
use milan_vedic_base::{
    AyanamshaModel, CurrentDasha, JupiterYear, KujaAnalysis, KujaStatus, Nakshatra, Rashi,
    wedding_month_window,
};

use crate::error::MilanError;
use crate::profile::BirthProfile;

/// Birth chart for a validated profile.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    engine: &E,
    profile: &BirthProfile,
    config: &ChartConfig,
) -> Result<Chart, MilanError> {
    Ok(chart_for_jd(
        engine,
        profile.jd_ut(),
        Some(profile.location()),
        config,
    )?)
}

/// Charts for both parties, then the match report.
pub fn match_profiles<E: Ephemeris + ?Sized>(
    engine: &E,
    boy: &BirthProfile,
    girl: &BirthProfile,
    chart_config: &ChartConfig,
    match_config: &MatchConfig,
) -> Result<MatchReport, MilanError> {
    let b = compute_chart(engine, boy, chart_config)?;
    let g = compute_chart(engine, girl, chart_config)?;
    score_match(&b, &g, match_config)
}

/// Match report for two computed charts.
pub fn score_match(
    boy: &Chart,
    girl: &Chart,
    config: &MatchConfig,
) -> Result<MatchReport, MilanError> {
    Ok(match_charts(boy, girl, config)?)
}

/// Aggregate Kuja Dosha status of a chart.
pub fn analyze_kuja_dosha(chart: &Chart) -> Result<KujaStatus, MilanError> {
    Ok(kuja_dosha_details(chart)?.status)
}

/// Per-reference Kuja Dosha breakdown of a chart.
///
/// Fails if the chart does not place Mars and Venus.
pub fn kuja_dosha_details(chart: &Chart) -> Result<KujaAnalysis, MilanError> {
    Ok(milan_vedic_base::analyze_kuja_dosha(&chart.kuja_inputs()?))
}

/// Running dasha at `query_jd`.
///
/// `birth_jd` must be the instant the chart was cast for.
pub fn current_dasha(
    chart: &Chart,
    birth_jd: f64,
    query_jd: f64,
) -> Result<CurrentDasha, MilanError> {
    if (birth_jd - chart.jd_ut).abs() > 1e-6 {
        return Err(MilanError::InvalidInput(format!(
            "birth JD {birth_jd} does not match chart JD {}",
            chart.jd_ut
        )));
    }
    Ok(dasha_for_chart(chart, query_jd)?)
}

/// All 108 nakshatra-pada candidates for a source party, best first.
pub fn find_best_matches(
    nakshatra: Nakshatra,
    rashi: Rashi,
    pada: u8,
    gender: Gender,
    sort: SortKey,
) -> Result<Vec<MatchCandidate>, MilanError> {
    Ok(find_matches(&MatchSearch {
        nakshatra_index: nakshatra.index(),
        rashi_index: rashi.index(),
        pada,
        gender,
        sort,
    })?)
}

/// Favourable wedding window for a Moon sign.
pub fn wedding_month(moon_rashi: Rashi) -> &'static str {
    wedding_month_window(moon_rashi)
}

/// Jupiter-transit rating for each of the next `count` years from `first_year`.
pub fn marriage_years<E: Ephemeris + ?Sized>(
    engine: &E,
    moon_rashi: Rashi,
    first_year: i32,
    count: u32,
    model: AyanamshaModel,
) -> Result<Vec<JupiterYear>, MilanError> {
    let count = i32::try_from(count)
        .map_err(|_| MilanError::InvalidInput(format!("year count {count} too large")))?;
    let last = first_year
        .checked_add(count)
        .ok_or_else(|| MilanError::InvalidInput("year range overflows".to_string()))?;
    Ok(jupiter_transit_years(
        engine,
        moon_rashi,
        first_year..last,
        model,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_core::Engine;

    fn delhi_1990() -> BirthProfile {
        BirthProfile::from_parts("A", 1990, 1, 1, 6, 0, 5.5, 28.6139, 77.2090).unwrap()
    }

    #[test]
    fn chart_moon_in_dhanishtha() {
        let chart = compute_chart(&Engine::default(), &delhi_1990(), &ChartConfig::default())
            .unwrap();
        assert_eq!(chart.moon.nakshatra, Nakshatra::Dhanishtha);
        assert_eq!(chart.moon.rashi, Rashi::Kumbha);
    }

    #[test]
    fn dasha_rejects_foreign_birth_jd() {
        let chart = compute_chart(&Engine::default(), &delhi_1990(), &ChartConfig::default())
            .unwrap();
        let err = current_dasha(&chart, chart.jd_ut + 1.0, chart.jd_ut + 10.0).unwrap_err();
        assert!(matches!(err, MilanError::InvalidInput(_)));
    }

    #[test]
    fn best_matches_bad_pada() {
        let err = find_best_matches(
            Nakshatra::Rohini,
            Rashi::Vrishabha,
            7,
            Gender::Male,
            SortKey::Final,
        )
        .unwrap_err();
        assert!(matches!(err, MilanError::Search(_)));
    }

    #[test]
    fn zero_years_is_empty() {
        let years =
            marriage_years(&Engine::default(), Rashi::Mesha, 2025, 0, AyanamshaModel::default())
                .unwrap();
        assert!(years.is_empty());
    }
}
