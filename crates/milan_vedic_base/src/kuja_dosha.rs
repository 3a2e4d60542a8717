//! Kuja Dosha (Mars affliction) analysis.
//!
//! Mars is checked from three reference points: the Ascendant, the Moon
//! and Venus. From each, Mars in the 2nd, 4th, 7th, 8th or 12th house is a
//! candidate dosha. Mars in its own signs (Mesha, Vrischika) or exalted
//! (Makara) neutralises it. Active references add their weight to the
//! severity: 1.0 for the Ascendant, 0.5 each for the Moon and Venus.

use serde::{Deserialize, Serialize};

use crate::rashi::{Rashi, rashi_index};
use crate::util::count_from;

/// Houses from a reference in which Mars afflicts.
pub const KUJA_HOUSES: [u8; 5] = [2, 4, 7, 8, 12];

/// Signs in which Mars is dignified enough to neutralise the dosha.
pub const MARS_STRONG_SIGNS: [Rashi; 3] = [Rashi::Mesha, Rashi::Vrischika, Rashi::Makara];

/// Reference point for a Kuja check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KujaReference {
    Ascendant,
    Moon,
    Venus,
}

/// All references, heaviest first.
pub const ALL_KUJA_REFERENCES: [KujaReference; 3] = [
    KujaReference::Ascendant,
    KujaReference::Moon,
    KujaReference::Venus,
];

impl KujaReference {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Moon => "Moon",
            Self::Venus => "Venus",
        }
    }

    /// Contribution to severity when active.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Ascendant => 1.0,
            Self::Moon | Self::Venus => 0.5,
        }
    }
}

/// Outcome of one reference check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KujaState {
    /// Mars afflicts from this reference.
    Active,
    /// Mars is in an afflicting house but strong by sign.
    Neutralized,
    /// Mars is not in an afflicting house.
    Clear,
}

impl KujaState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Neutralized => "Neutralized",
            Self::Clear => "Clear",
        }
    }
}

/// House position of Mars from a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KujaCheck {
    /// House of Mars counted from the reference, 1..=12.
    pub house: u8,
    pub state: KujaState,
}

/// Check Mars from one reference longitude (sidereal degrees).
pub fn kuja_from_reference(reference_lon_deg: f64, mars_lon_deg: f64) -> KujaCheck {
    let mars_rashi = rashi_index(mars_lon_deg);
    let house = count_from(rashi_index(reference_lon_deg), mars_rashi, 12);
    let state = if !KUJA_HOUSES.contains(&house) {
        KujaState::Clear
    } else if MARS_STRONG_SIGNS.contains(&Rashi::from_index(mars_rashi)) {
        KujaState::Neutralized
    } else {
        KujaState::Active
    };
    KujaCheck { house, state }
}

/// One line of the per-reference breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KujaDetail {
    pub reference: KujaReference,
    pub house: u8,
    pub state: KujaState,
    pub detail: String,
}

/// Aggregate Kuja Dosha status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KujaStatus {
    None,
    Partial,
    High,
}

impl KujaStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Partial => "Partial",
            Self::High => "High",
        }
    }

    fn from_severity(severity: f64) -> Self {
        if severity <= 0.0 {
            Self::None
        } else if severity < 1.0 {
            Self::Partial
        } else {
            Self::High
        }
    }
}

/// Full Kuja Dosha analysis of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KujaAnalysis {
    pub details: Vec<KujaDetail>,
    /// Sum of weights of active references, 0.0..=2.0.
    pub severity: f64,
    pub status: KujaStatus,
}

/// Sidereal longitudes the analysis needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KujaInputs {
    pub mars: f64,
    /// `None` when the birth time or place does not fix the Ascendant.
    pub ascendant: Option<f64>,
    pub moon: f64,
    pub venus: f64,
}

fn describe(check: &KujaCheck, mars: Rashi) -> String {
    match check.state {
        KujaState::Active => format!("Active Energy: Mars in house {}", check.house),
        KujaState::Neutralized => format!(
            "Balanced: Mars in house {} but strong in {}",
            check.house,
            mars.name()
        ),
        KujaState::Clear => format!("Balanced: Mars in house {}", check.house),
    }
}

/// Analyse Mars from every available reference.
pub fn analyze_kuja_dosha(inputs: &KujaInputs) -> KujaAnalysis {
    let mars_rashi = Rashi::from_index(rashi_index(inputs.mars));
    let references = [
        (KujaReference::Ascendant, inputs.ascendant),
        (KujaReference::Moon, Some(inputs.moon)),
        (KujaReference::Venus, Some(inputs.venus)),
    ];

    let mut details = Vec::with_capacity(references.len());
    let mut severity = 0.0;
    for (reference, lon) in references {
        let Some(lon) = lon else { continue };
        let check = kuja_from_reference(lon, inputs.mars);
        if check.state == KujaState::Active {
            severity += reference.weight();
        }
        details.push(KujaDetail {
            reference,
            house: check.house,
            state: check.state,
            detail: describe(&check, mars_rashi),
        });
    }

    KujaAnalysis {
        details,
        severity,
        status: KujaStatus::from_severity(severity),
    }
}
