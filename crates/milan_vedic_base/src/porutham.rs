//! South-Indian poruthams and the overall match verdict.
//!
//! Mahendra and Stree Deergha are both counted from the girl's nakshatra to
//! the boy's. They do not add points; they feed the verdict.

use serde::{Deserialize, Serialize};

use crate::guna_milan::{GunaMilanResult, RajjuStatus, VedhaStatus};
use crate::nakshatra::Nakshatra;
use crate::util::{count_from, forward_distance};

/// Star counts (girl → boy, inclusive) at which Mahendra is present.
pub const MAHENDRA_COUNTS: [u8; 8] = [4, 7, 10, 13, 16, 19, 22, 25];

/// Stree Deergha grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreeDeergha {
    Excellent,
    Good,
    Weak,
}

impl StreeDeergha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Weak => "Weak",
        }
    }
}

/// Supplementary porutham results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Poruthams {
    pub mahendra: bool,
    pub stree_deergha: StreeDeergha,
    /// Zero-based star distance from girl to boy.
    pub stree_distance: u8,
}

/// Mahendra: present when the inclusive count from the girl's star to the
/// boy's is 4, 7, 10 ... 25.
pub fn mahendra(boy: Nakshatra, girl: Nakshatra) -> bool {
    MAHENDRA_COUNTS.contains(&count_from(girl.index(), boy.index(), 27))
}

/// Stree Deergha from the zero-based distance girl → boy.
pub fn stree_deergha(boy: Nakshatra, girl: Nakshatra) -> StreeDeergha {
    match forward_distance(girl.index(), boy.index(), 27) {
        d if d > 13 => StreeDeergha::Excellent,
        d if d > 7 => StreeDeergha::Good,
        _ => StreeDeergha::Weak,
    }
}

/// Both poruthams for a pair.
pub fn poruthams(boy: Nakshatra, girl: Nakshatra) -> Poruthams {
    Poruthams {
        mahendra: mahendra(boy, girl),
        stree_deergha: stree_deergha(boy, girl),
        stree_distance: forward_distance(girl.index(), boy.index(), 27),
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Final total at or above which a match is excellent.
pub const EXCELLENT_THRESHOLD: f64 = 25.0;

/// Final total at or above which a match is good.
pub const GOOD_THRESHOLD: f64 = 18.0;

/// Overall recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Excellent,
    Good,
    /// Below the good threshold, but Mahendra is present.
    LowButMahendra,
    NotRecommended,
    /// Rajju or Vedha failed; needs an astrologer's review whatever the total.
    NeedsReview,
}

impl Verdict {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::LowButMahendra => "Low Score but Mahendra Present",
            Self::NotRecommended => "Not Recommended",
            Self::NeedsReview => "Needs Review",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict from a scored pair and its poruthams.
pub fn verdict(result: &GunaMilanResult, poruthams: &Poruthams) -> Verdict {
    if result.rajju == RajjuStatus::Fail || result.vedha == VedhaStatus::Fail {
        Verdict::NeedsReview
    } else if result.final_total >= EXCELLENT_THRESHOLD {
        Verdict::Excellent
    } else if result.final_total >= GOOD_THRESHOLD {
        Verdict::Good
    } else if poruthams.mahendra {
        Verdict::LowButMahendra
    } else {
        Verdict::NotRecommended
    }
}
