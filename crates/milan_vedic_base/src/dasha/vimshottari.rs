//! Vimshottari dasha: the 120-year nakshatra-based cycle.
//!
//! Nine lords in fixed order. The Moon's birth nakshatra picks the first
//! lord (`order[nakshatra % 9]`); the unexpired part of that nakshatra sets
//! how much of the first period remains. Sub-periods (antardashas) start
//! with the mahadasha lord and divide its span in proportion to each lord's
//! full years.

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::nakshatra_birth_balance;
use super::types::{CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTone};

/// Lords in Vimshottari order, starting from Ashwini's lord.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full period of each lord in years, same order as the sequence.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the whole cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Sequence position of a lord. Every graha is a Vimshottari lord.
fn sequence_index(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == lord)
        .unwrap_or(0)
}

/// Full Vimshottari years of a lord.
pub fn vimshottari_years(lord: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_index(lord)]
}

/// Starting lord for a birth nakshatra index.
pub const fn starting_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize]
}

// ── Mahadashas ───────────────────────────────────────────────────────

/// One full round of mahadashas from birth: the balance of the starting
/// lord followed by the other eight in order.
pub fn vimshottari_level0(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let (nak_idx, _, _) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    let start = (nak_idx % 9) as usize;
    let (_, balance_years, _) =
        nakshatra_birth_balance(moon_sidereal_lon, VIMSHOTTARI_YEARS[start]);

    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cursor = birth_jd;
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let idx = (start + offset) % VIMSHOTTARI_SEQUENCE.len();
        let years = if offset == 0 {
            balance_years
        } else {
            VIMSHOTTARI_YEARS[idx]
        };
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord: VIMSHOTTARI_SEQUENCE[idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: offset as u16 + 1,
        });
        cursor = end;
    }
    periods
}

// ── Antardashas ──────────────────────────────────────────────────────

/// Sub-periods of a mahadasha.
///
/// Proportions are taken over the lord's full period ending at
/// `parent.end_jd`. When the parent is a birth-balance period, the
/// sub-periods that ended before `parent.start_jd` are dropped and the
/// running one is clipped.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let start = sequence_index(parent.lord);
    let full_days = VIMSHOTTARI_YEARS[start] * DAYS_PER_YEAR;
    let nominal_start = parent.end_jd - full_days;

    let mut children = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cursor = nominal_start;
    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let idx = (start + offset) % VIMSHOTTARI_SEQUENCE.len();
        let duration = VIMSHOTTARI_YEARS[idx] / VIMSHOTTARI_TOTAL_YEARS * full_days;
        let end = cursor + duration;
        if end > parent.start_jd {
            children.push(DashaPeriod {
                lord: VIMSHOTTARI_SEQUENCE[idx],
                start_jd: cursor.max(parent.start_jd),
                end_jd: end,
                level: child_level,
                order: offset as u16 + 1,
            });
        }
        cursor = end;
    }

    // Absorb floating-point drift.
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

// ── Current period ───────────────────────────────────────────────────

/// The mahadasha (and antardasha) running at `query_jd`.
///
/// Walks the cyclic sequence from the birth balance, so ages beyond one
/// 120-year round are handled.
pub fn current_dasha(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Result<CurrentDasha, VedicError> {
    if !(birth_jd.is_finite() && query_jd.is_finite() && moon_sidereal_lon.is_finite()) {
        return Err(VedicError::InvalidInput(
            "dasha inputs must be finite".to_string(),
        ));
    }
    if query_jd < birth_jd {
        return Err(VedicError::InvalidInput(format!(
            "query JD {query_jd} precedes birth JD {birth_jd}"
        )));
    }

    let elapsed_years = (query_jd - birth_jd) / DAYS_PER_YEAR;
    let (nak_idx, _, _) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    let mut idx = (nak_idx % 9) as usize;
    let (_, balance_years, _) = nakshatra_birth_balance(moon_sidereal_lon, VIMSHOTTARI_YEARS[idx]);

    let mut period_start_years = 0.0;
    let mut period_years = balance_years;
    let mut order: u16 = 1;
    while elapsed_years >= period_start_years + period_years {
        period_start_years += period_years;
        idx = (idx + 1) % VIMSHOTTARI_SEQUENCE.len();
        period_years = VIMSHOTTARI_YEARS[idx];
        order = order.saturating_add(1);
    }

    let lord = VIMSHOTTARI_SEQUENCE[idx];
    let maha = DashaPeriod {
        lord,
        start_jd: birth_jd + period_start_years * DAYS_PER_YEAR,
        end_jd: birth_jd + (period_start_years + period_years) * DAYS_PER_YEAR,
        level: DashaLevel::Mahadasha,
        order,
    };
    let subs = antardashas(&maha);
    let antardasha = subs
        .iter()
        .copied()
        .find(|p| p.contains(query_jd))
        .or_else(|| subs.last().copied())
        .ok_or_else(|| VedicError::InvalidInput("empty mahadasha".to_string()))?;

    Ok(CurrentDasha {
        lord,
        tone: DashaTone::of(lord),
        start_jd: maha.start_jd,
        end_jd: maha.end_jd,
        elapsed_years,
        antardasha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    const BIRTH: f64 = 2_447_892.5;

    #[test]
    fn years_sum_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn starting_lords_repeat_every_nine() {
        assert_eq!(starting_lord(0), Graha::Ketu);
        assert_eq!(starting_lord(9), Graha::Ketu);
        assert_eq!(starting_lord(18), Graha::Ketu);
        assert_eq!(starting_lord(3), Graha::Chandra);
        assert_eq!(starting_lord(26), Graha::Buddh);
    }

    #[test]
    fn level0_from_start_of_ashwini_is_full_cycle() {
        let periods = vimshottari_level0(BIRTH, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, Graha::Ketu);
        let total = (periods[8].end_jd - BIRTH) / DAYS_PER_YEAR;
        assert!((total - 120.0).abs() < 1e-9, "total = {total}");
    }

    #[test]
    fn level0_is_contiguous() {
        let periods = vimshottari_level0(BIRTH, 123.4);
        for w in periods.windows(2) {
            assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
        }
    }

    #[test]
    fn balance_halves_at_mid_nakshatra() {
        let periods = vimshottari_level0(BIRTH, NAKSHATRA_SPAN_27 / 2.0);
        assert!((periods[0].duration_years() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn ten_years_after_ashwini_start_is_venus() {
        let d = current_dasha(BIRTH, 0.0, BIRTH + 10.0 * DAYS_PER_YEAR).unwrap();
        assert_eq!(d.lord, Graha::Shukra);
        assert_eq!(d.tone, DashaTone::Favourable);
        assert!((d.elapsed_years - 10.0).abs() < 1e-9);
        assert!(((d.start_jd - BIRTH) / DAYS_PER_YEAR - 7.0).abs() < 1e-9);
        // Venus/Venus runs 20 * 20 / 120 = 3.333 years.
        assert_eq!(d.antardasha.lord, Graha::Shukra);
    }

    #[test]
    fn at_birth_is_starting_lord() {
        let d = current_dasha(BIRTH, 303.114, BIRTH).unwrap();
        assert_eq!(d.lord, Graha::Mangal);
        assert_eq!(d.tone, DashaTone::Mixed);
        assert!((d.start_jd - BIRTH).abs() < 1e-9);
    }

    #[test]
    fn wraps_past_one_cycle() {
        let d = current_dasha(BIRTH, 0.0, BIRTH + 121.0 * DAYS_PER_YEAR).unwrap();
        assert_eq!(d.lord, Graha::Ketu);
        assert_eq!(d.tone, DashaTone::Challenging);
    }

    #[test]
    fn query_before_birth_rejected() {
        let err = current_dasha(BIRTH, 0.0, BIRTH - 1.0).unwrap_err();
        assert!(matches!(err, VedicError::InvalidInput(_)));
    }

    #[test]
    fn antardashas_cover_parent() {
        let periods = vimshottari_level0(BIRTH, 0.0);
        let subs = antardashas(&periods[1]);
        assert_eq!(subs.len(), 9);
        assert_eq!(subs[0].lord, periods[1].lord);
        assert!((subs[0].start_jd - periods[1].start_jd).abs() < 1e-6);
        assert!((subs[8].end_jd - periods[1].end_jd).abs() < 1e-12);
        let total: f64 = subs.iter().map(DashaPeriod::duration_days).sum();
        assert!((total - periods[1].duration_days()).abs() < 1e-6);
    }

    #[test]
    fn balance_period_antardashas_are_clipped() {
        // Halfway through Ashwini: Ketu balance 3.5 of 7 years.
        let periods = vimshottari_level0(BIRTH, NAKSHATRA_SPAN_27 / 2.0);
        let subs = antardashas(&periods[0]);
        assert!(subs.len() < 9);
        assert!((subs[0].start_jd - BIRTH).abs() < 1e-9);
        for w in subs.windows(2) {
            assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
        }
    }
}
