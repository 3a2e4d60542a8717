//! Match reports: one immutable result per boy/girl request.
//!
//! The report always carries the Guna Milan score, Rajju, Vedha, the
//! safety flag, poruthams and the verdict. Charts, Kuja Dosha and dasha
//! are added per [`MatchConfig`].

use milan_vedic_base::{
    CancellationEntry, CurrentDasha, GunaMilanResult, KootaResult, KujaAnalysis, MatchParty,
    Poruthams, RajjuStatus, SafetyFlag, VedhaStatus, Verdict, analyze_kuja_dosha, guna_milan,
    poruthams, verdict,
};
use serde::Serialize;

use crate::dasha::dasha_for_chart;
use crate::error::SearchError;
use crate::jyotish_types::Chart;

/// What a match report includes beyond the score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchConfig {
    /// Attach both charts to the report.
    pub include_charts: bool,
    /// Attach the running dasha of each party. Needs `query_jd`.
    pub include_dasha: bool,
    /// Attach a Kuja Dosha analysis of each party.
    pub include_kuja_dosha: bool,
    /// UT Julian Date at which dashas are evaluated.
    pub query_jd: Option<f64>,
}

impl MatchConfig {
    /// Everything on, dashas evaluated at `query_jd`.
    pub fn full(query_jd: f64) -> Self {
        Self {
            include_charts: true,
            include_dasha: true,
            include_kuja_dosha: true,
            query_jd: Some(query_jd),
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.include_dasha {
            match self.query_jd {
                Some(jd) if jd.is_finite() => {}
                Some(_) => {
                    return Err(SearchError::InvalidInput(
                        "query_jd must be finite".to_string(),
                    ));
                }
                None => {
                    return Err(SearchError::InvalidInput(
                        "dasha requested without query_jd".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Optional per-party extras.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PartyDetails {
    pub chart: Option<Chart>,
    pub kuja_dosha: Option<KujaAnalysis>,
    pub dasha: Option<CurrentDasha>,
}

/// Complete outcome of a compatibility request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub boy_party: MatchParty,
    pub girl_party: MatchParty,
    pub raw_total: f64,
    pub final_total: f64,
    pub kootas: [KootaResult; 8],
    pub maitri_points: f64,
    pub rajju: RajjuStatus,
    pub vedha: VedhaStatus,
    pub safety: SafetyFlag,
    pub poruthams: Poruthams,
    pub verdict: Verdict,
    pub cancellation_log: Vec<CancellationEntry>,
    pub boy: PartyDetails,
    pub girl: PartyDetails,
}

impl MatchReport {
    fn from_score(
        boy_party: MatchParty,
        girl_party: MatchParty,
        score: GunaMilanResult,
        boy: PartyDetails,
        girl: PartyDetails,
    ) -> Self {
        let p = poruthams(boy_party.nakshatra, girl_party.nakshatra);
        let v = verdict(&score, &p);
        Self {
            boy_party,
            girl_party,
            raw_total: score.raw_total,
            final_total: score.final_total,
            kootas: score.kootas,
            maitri_points: score.maitri_points,
            rajju: score.rajju,
            vedha: score.vedha,
            safety: score.safety,
            poruthams: p,
            verdict: v,
            cancellation_log: score.cancellation_log,
            boy,
            girl,
        }
    }
}

/// Report for two parties known only by their Moon placements.
pub fn match_parties(boy: &MatchParty, girl: &MatchParty) -> MatchReport {
    MatchReport::from_score(
        *boy,
        *girl,
        guna_milan(boy, girl),
        PartyDetails::default(),
        PartyDetails::default(),
    )
}

fn party_details(chart: &Chart, config: &MatchConfig) -> Result<PartyDetails, SearchError> {
    let kuja_dosha = if config.include_kuja_dosha {
        Some(analyze_kuja_dosha(&chart.kuja_inputs()?))
    } else {
        None
    };
    let dasha = match (config.include_dasha, config.query_jd) {
        (true, Some(jd)) => Some(dasha_for_chart(chart, jd)?),
        _ => None,
    };
    Ok(PartyDetails {
        chart: config.include_charts.then(|| chart.clone()),
        kuja_dosha,
        dasha,
    })
}

/// Report for two computed birth charts.
pub fn match_charts(
    boy: &Chart,
    girl: &Chart,
    config: &MatchConfig,
) -> Result<MatchReport, SearchError> {
    config.validate()?;
    let (b, g) = (boy.match_party(), girl.match_party());
    Ok(MatchReport::from_score(
        b,
        g,
        guna_milan(&b, &g),
        party_details(boy, config)?,
        party_details(girl, config)?,
    ))
}
