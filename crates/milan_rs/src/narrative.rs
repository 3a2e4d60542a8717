//! Optional narrative text for a match report.
//!
//! Text generation is an external service reached through [`Narrator`].
//! It runs strictly after scoring: a missing or failing narrator yields
//! [`Narrative::Unavailable`] and the report itself is untouched.

use std::fmt::Write as _;

use milan_search::MatchReport;
use serde::Serialize;

use crate::error::NarrativeError;

/// Turns a finished report into prose.
pub trait Narrator: Send + Sync {
    fn narrate(&self, report: &MatchReport) -> Result<String, NarrativeError>;
}

/// Narrative outcome. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Narrative {
    Text(String),
    /// Reason the text could not be produced.
    Unavailable(String),
}

impl Narrative {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Unavailable(_) => None,
        }
    }
}

/// Run the narrator if there is one, absorbing every failure.
pub fn generate_narrative(narrator: Option<&dyn Narrator>, report: &MatchReport) -> Narrative {
    let Some(narrator) = narrator else {
        return Narrative::Unavailable("no narrator configured".to_string());
    };
    match narrator.narrate(report) {
        Ok(text) if !text.trim().is_empty() => Narrative::Text(text),
        Ok(_) => Narrative::Unavailable(NarrativeError::EmptyResponse.to_string()),
        Err(e) => Narrative::Unavailable(e.to_string()),
    }
}

/// Plain-text digest of a report: the facts a narrator is given to work from.
pub fn report_summary(report: &MatchReport) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Boy: {} ({}), Girl: {} ({})",
        report.boy_party.nakshatra,
        report.boy_party.rashi.name(),
        report.girl_party.nakshatra,
        report.girl_party.rashi.name()
    );
    let _ = writeln!(
        s,
        "Score: {:.1}/36 (raw {:.1}), verdict: {}",
        report.final_total, report.raw_total, report.verdict
    );
    for k in &report.kootas {
        let _ = write!(
            s,
            "{}: {:.1}/{:.0} - {}",
            k.koota, k.final_score, k.max_score, k.rationale
        );
        if let Some(reason) = k.cancellation_reason {
            let _ = write!(s, " [restored: {reason}]");
        }
        s.push('\n');
    }
    let _ = writeln!(
        s,
        "Rajju: {}, Vedha: {}, Safety: {}",
        report.rajju.name(),
        report.vedha.name(),
        report.safety.name()
    );
    let _ = writeln!(
        s,
        "Mahendra: {}, Stree Deergha: {}",
        if report.poruthams.mahendra { "Yes" } else { "No" },
        report.poruthams.stree_deergha.name()
    );
    for (who, party) in [("Boy", &report.boy), ("Girl", &report.girl)] {
        if let Some(k) = &party.kuja_dosha {
            let _ = writeln!(s, "{who} Kuja Dosha: {}", k.status.name());
        }
        if let Some(d) = &party.dasha {
            let _ = writeln!(s, "{who} dasha: {} ({})", d.lord.name(), d.tone.name());
        }
    }
    s
}
