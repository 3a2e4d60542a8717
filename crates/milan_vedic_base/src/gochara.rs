//! Gochara (transit) timing helpers.
//!
//! Two rules of thumb used when fixing a wedding date from a Moon sign:
//! the Sun transiting the 7th sign from it, and Jupiter transiting one of
//! the favourable houses counted from it.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;
use crate::util::count_from;

/// Approximate civil dates of the Sun's sidereal ingress into each rashi,
/// indexed by rashi.
pub const SUN_TRANSIT_WINDOWS: [&str; 12] = [
    "Apr 14 - May 14",
    "May 15 - Jun 14",
    "Jun 15 - Jul 15",
    "Jul 16 - Aug 16",
    "Aug 17 - Sep 16",
    "Sep 17 - Oct 16",
    "Oct 17 - Nov 15",
    "Nov 16 - Dec 15",
    "Dec 16 - Jan 13",
    "Jan 14 - Feb 12",
    "Feb 13 - Mar 13",
    "Mar 14 - Apr 13",
];

/// Houses from the Moon sign in which a transiting Jupiter blesses the year.
pub const JUPITER_FAVOURABLE_HOUSES: [u8; 5] = [2, 5, 7, 9, 11];

/// Window in which the Sun transits the 7th sign from `moon_rashi`.
pub const fn wedding_month_window(moon_rashi: Rashi) -> &'static str {
    SUN_TRANSIT_WINDOWS[moon_rashi.nth_from(7).index() as usize]
}

/// Rating of a year by Jupiter's transit house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearRating {
    Excellent,
    Neutral,
}

impl YearRating {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Year",
            Self::Neutral => "Neutral Year",
        }
    }
}

/// Jupiter's transit house from the Moon sign and the rating it gives.
pub fn jupiter_house_rating(moon_rashi: Rashi, jupiter_rashi: Rashi) -> (u8, YearRating) {
    let house = count_from(moon_rashi.index(), jupiter_rashi.index(), 12);
    let rating = if JUPITER_FAVOURABLE_HOUSES.contains(&house) {
        YearRating::Excellent
    } else {
        YearRating::Neutral
    };
    (house, rating)
}

/// One year of a Jupiter transit forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JupiterYear {
    pub year: i32,
    pub jupiter_rashi: Rashi,
    /// House of Jupiter counted from the Moon sign, 1..=12.
    pub house: u8,
    pub rating: YearRating,
    pub detail: String,
}

impl JupiterYear {
    pub fn new(year: i32, moon_rashi: Rashi, jupiter_rashi: Rashi) -> Self {
        let (house, rating) = jupiter_house_rating(moon_rashi, jupiter_rashi);
        Self {
            year,
            jupiter_rashi,
            house,
            rating,
            detail: format!("Jupiter in House {house}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_weds_when_sun_in_libra() {
        assert_eq!(wedding_month_window(Rashi::Mesha), "Oct 17 - Nov 15");
        assert_eq!(wedding_month_window(Rashi::Tula), "Apr 14 - May 14");
        assert_eq!(wedding_month_window(Rashi::Kumbha), "Aug 17 - Sep 16");
    }

    #[test]
    fn jupiter_in_seventh_is_excellent() {
        let (house, rating) = jupiter_house_rating(Rashi::Mesha, Rashi::Tula);
        assert_eq!(house, 7);
        assert_eq!(rating, YearRating::Excellent);
    }

    #[test]
    fn jupiter_on_moon_is_neutral() {
        let (house, rating) = jupiter_house_rating(Rashi::Karka, Rashi::Karka);
        assert_eq!(house, 1);
        assert_eq!(rating, YearRating::Neutral);
    }

    #[test]
    fn five_favourable_houses_per_moon_sign() {
        for moon in 0..12u8 {
            let n = (0..12u8)
                .filter(|&j| {
                    jupiter_house_rating(Rashi::from_index(moon), Rashi::from_index(j)).1
                        == YearRating::Excellent
                })
                .count();
            assert_eq!(n, 5);
        }
    }

    #[test]
    fn year_detail_names_house() {
        let y = JupiterYear::new(2026, Rashi::Vrishabha, Rashi::Karka);
        assert_eq!(y.house, 3);
        assert_eq!(y.detail, "Jupiter in House 3");
        assert_eq!(y.rating, YearRating::Neutral);
    }
}
