//! Core types for Vimshottari dasha periods.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used for dasha arithmetic (Julian year).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration in Julian years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls inside `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Broad character of a running period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashaTone {
    Favourable,
    Mixed,
    Challenging,
}

impl DashaTone {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favourable => "Favourable",
            Self::Mixed => "Mixed",
            Self::Challenging => "Challenging",
        }
    }

    /// Tone of a dasha lord: natural benefics are favourable, Sun and Mars
    /// mixed, Saturn and the nodes challenging.
    pub const fn of(lord: Graha) -> Self {
        match lord {
            Graha::Guru | Graha::Shukra | Graha::Buddh | Graha::Chandra => Self::Favourable,
            Graha::Surya | Graha::Mangal => Self::Mixed,
            Graha::Shani | Graha::Rahu | Graha::Ketu => Self::Challenging,
        }
    }
}

/// The period running at a query instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub lord: Graha,
    pub tone: DashaTone,
    /// JD UT at which the mahadasha began (or birth, for the first one).
    pub start_jd: f64,
    pub end_jd: f64,
    /// Julian years from birth to the query instant.
    pub elapsed_years: f64,
    /// Running sub-period.
    pub antardasha: DashaPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn every_graha_has_a_tone() {
        let fav = ALL_GRAHAS
            .iter()
            .filter(|&&g| DashaTone::of(g) == DashaTone::Favourable)
            .count();
        let mixed = ALL_GRAHAS
            .iter()
            .filter(|&&g| DashaTone::of(g) == DashaTone::Mixed)
            .count();
        assert_eq!((fav, mixed), (4, 2));
    }

    #[test]
    fn period_contains_is_half_open() {
        let p = DashaPeriod {
            lord: Graha::Ketu,
            start_jd: 10.0,
            end_jd: 20.0,
            level: DashaLevel::Mahadasha,
            order: 1,
        };
        assert!(p.contains(10.0));
        assert!(!p.contains(20.0));
        assert!((p.duration_years() - 10.0 / 365.25).abs() < 1e-12);
    }

    #[test]
    fn level_chain() {
        assert_eq!(DashaLevel::Mahadasha.child_level(), Some(DashaLevel::Antardasha));
        assert_eq!(DashaLevel::Antardasha.child_level(), None);
    }
}
