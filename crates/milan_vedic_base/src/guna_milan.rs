//! Ashta Koota (Guna Milan) compatibility scoring.
//!
//! Eight kootas with a combined maximum of 36 points. Each koota has a raw
//! rule and a set of Dosha Bhanga triggers; any trigger restores the koota
//! to its maximum and is recorded in the cancellation log. Cancellations
//! never lower a score, so `raw <= final` holds koota by koota.
//!
//! Two pass/fail checks sit beside the points: Rajju (body-part group) and
//! Vedha (obstructing star pairs). A safety flag marks the combination of a
//! passing total with both Bhakoot and Nadi at zero.

use serde::{Deserialize, Serialize};

use crate::amsha::navamsa_rashi;
use crate::koota_tables::{
    MAITRI_FRIENDLY_THRESHOLD, NADI_SAME_STAR_EXCEPTIONS, VARNA, VASHYA, Gana, gana, nadi,
    rajju_group, rashi_maitri, vedha_partner, yoni, yoni_enemies, yoni_name,
};
use crate::nakshatra::{Nakshatra, NakshatraPlacement, pada_midpoint_longitude};
use crate::rashi::Rashi;
use crate::util::count_from;

/// Total points available across the eight kootas.
pub const MAX_GUNA_POINTS: f64 = 36.0;

/// Final total above which a Bhakoot + Nadi double dosha is flagged.
pub const RISKY_TOTAL_THRESHOLD: f64 = 18.0;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// One side of a match: Moon nakshatra and rashi, optionally the Moon's
/// navamsa rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchParty {
    pub nakshatra: Nakshatra,
    pub rashi: Rashi,
    pub navamsa_rashi: Option<Rashi>,
}

impl MatchParty {
    /// Party without navamsa information.
    pub const fn new(nakshatra: Nakshatra, rashi: Rashi) -> Self {
        Self {
            nakshatra,
            rashi,
            navamsa_rashi: None,
        }
    }

    pub const fn with_navamsa(self, navamsa_rashi: Rashi) -> Self {
        Self {
            navamsa_rashi: Some(navamsa_rashi),
            ..self
        }
    }

    /// Party from a sidereal Moon longitude, navamsa included.
    pub fn from_moon_longitude(sidereal_lon_deg: f64) -> Self {
        let p = NakshatraPlacement::from_longitude(sidereal_lon_deg);
        Self::new(p.nakshatra, p.rashi).with_navamsa(navamsa_rashi(sidereal_lon_deg))
    }

    /// Party from a nakshatra pada, using the pada's midpoint longitude.
    pub fn from_pada(nakshatra: Nakshatra, pada: u8) -> Option<Self> {
        pada_midpoint_longitude(nakshatra, pada).map(Self::from_moon_longitude)
    }
}

// ---------------------------------------------------------------------------
// Koota identity
// ---------------------------------------------------------------------------

/// The eight kootas, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    Maitri,
    Gana,
    Bhakoot,
    Nadi,
}

/// All kootas in scoring order.
pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::Maitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::Maitri => "Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points; the eight maxima run 1 through 8.
    pub const fn max_score(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::Maitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Koota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Score of a single koota.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KootaResult {
    pub koota: Koota,
    pub raw_score: f64,
    pub final_score: f64,
    pub max_score: f64,
    pub rationale: String,
    /// Set when a Dosha Bhanga rule restored the koota.
    pub cancellation_reason: Option<&'static str>,
}

impl KootaResult {
    pub fn is_cancelled(&self) -> bool {
        self.cancellation_reason.is_some()
    }
}

/// One applied cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancellationEntry {
    pub koota: Koota,
    pub reason: &'static str,
}

/// Rajju check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RajjuStatus {
    Pass,
    Fail,
    /// Same group, but the dosha is neutralised.
    Cancelled,
}

impl RajjuStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Vedha check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VedhaStatus {
    Pass,
    Fail,
}

impl VedhaStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// Derived safety flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyFlag {
    Clear,
    /// Passing total hides a Bhakoot and Nadi double dosha.
    Risky,
}

impl SafetyFlag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Risky => "Risky",
        }
    }
}

/// Full Guna Milan outcome for a boy/girl pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GunaMilanResult {
    /// Per-koota results in [`ALL_KOOTAS`] order.
    pub kootas: [KootaResult; 8],
    pub raw_total: f64,
    pub final_total: f64,
    /// Maitri points between the two Moon-sign lords.
    pub maitri_points: f64,
    pub maitri_friendly: bool,
    pub navamsa_friendly: bool,
    pub rajju: RajjuStatus,
    pub vedha: VedhaStatus,
    pub safety: SafetyFlag,
    pub cancellation_log: Vec<CancellationEntry>,
}

impl GunaMilanResult {
    pub fn koota(&self, koota: Koota) -> &KootaResult {
        &self.kootas[koota.index()]
    }
}

// ---------------------------------------------------------------------------
// Cancellation reasons
// ---------------------------------------------------------------------------

const REASON_MAITRI: &str = "Moon-sign lords are friends";
const REASON_NAVAMSA: &str = "Navamsa lords are friends";
const REASON_YONI_PERFECT: &str = "Yoni is a perfect match";
const REASON_BHAKOOT_CLEAN: &str = "Bhakoot is clean";
const REASON_VASHYA: &str = "Vashya is compatible";
const REASON_STAR_DISTANCE: &str = "Girl's star is 14 or more from boy's";
const REASON_NADI_DIFFERS: &str = "Nadi types differ";
const REASON_NADI_EXCEPTION: &str = "Same nakshatra in the Nadi exception list";
const REASON_SAME_RASHI: &str = "Same rashi with different nakshatras";

/// First trigger that fires, in rule order.
fn first_trigger(triggers: &[(bool, &'static str)]) -> Option<&'static str> {
    triggers.iter().find(|(hit, _)| *hit).map(|(_, reason)| *reason)
}

fn settle(
    koota: Koota,
    raw: f64,
    rationale: String,
    triggers: &[(bool, &'static str)],
) -> KootaResult {
    let max = koota.max_score();
    let cancellation_reason = if raw < max {
        first_trigger(triggers)
    } else {
        None
    };
    KootaResult {
        koota,
        raw_score: raw,
        final_score: if cancellation_reason.is_some() { max } else { raw },
        max_score: max,
        rationale,
        cancellation_reason,
    }
}

// ---------------------------------------------------------------------------
// Raw rules
// ---------------------------------------------------------------------------

fn varna_raw(boy: Rashi, girl: Rashi) -> f64 {
    if VARNA[boy.index() as usize] <= VARNA[girl.index() as usize] {
        1.0
    } else {
        0.0
    }
}

fn vashya_raw(boy: Rashi, girl: Rashi) -> f64 {
    let b = VASHYA[boy.index() as usize];
    let g = VASHYA[girl.index() as usize];
    if b == g {
        2.0
    } else if b.min(g) == 0 && b.max(g) == 1 {
        1.0
    } else {
        0.5
    }
}

fn is_bad_tara(count: u8) -> bool {
    matches!(count % 9, 3 | 5 | 7)
}

/// Tara points plus the two directional counts (boy→girl, girl→boy).
fn tara_raw(boy: Nakshatra, girl: Nakshatra) -> (f64, u8, u8) {
    let to_girl = count_from(boy.index(), girl.index(), 27);
    let to_boy = count_from(girl.index(), boy.index(), 27);
    let bad = u8::from(is_bad_tara(to_girl)) + u8::from(is_bad_tara(to_boy));
    let points = match bad {
        0 => 3.0,
        1 => 1.5,
        _ => 0.0,
    };
    (points, to_girl, to_boy)
}

fn yoni_raw(boy: Nakshatra, girl: Nakshatra) -> f64 {
    let (b, g) = (yoni(boy), yoni(girl));
    if b == g {
        4.0
    } else if yoni_enemies(b, g) || yoni_enemies(g, b) {
        0.0
    } else {
        2.0
    }
}

fn gana_raw(boy: Gana, girl: Gana) -> f64 {
    use Gana::*;
    match (boy, girl) {
        (a, b) if a == b => 6.0,
        (Deva, Manushya) | (Manushya, Deva) => 6.0,
        (Deva, Rakshasa) | (Rakshasa, Deva) => 1.0,
        _ => 0.0,
    }
}

fn bhakoot_raw(boy: Rashi, girl: Rashi) -> f64 {
    let dist = (i16::from(boy.index()) - i16::from(girl.index())).rem_euclid(12);
    if matches!(dist, 1 | 4 | 5 | 7 | 8 | 11) {
        0.0
    } else {
        7.0
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Score a boy/girl pair.
pub fn guna_milan(boy: &MatchParty, girl: &MatchParty) -> GunaMilanResult {
    let maitri_points = rashi_maitri(boy.rashi, girl.rashi);
    let maitri_friendly = maitri_points >= MAITRI_FRIENDLY_THRESHOLD;
    let navamsa_friendly = match (boy.navamsa_rashi, girl.navamsa_rashi) {
        (Some(b), Some(g)) => rashi_maitri(b, g) >= MAITRI_FRIENDLY_THRESHOLD,
        _ => false,
    };

    let varna = varna_raw(boy.rashi, girl.rashi);
    let vashya = vashya_raw(boy.rashi, girl.rashi);
    let (tara, to_girl, to_boy) = tara_raw(boy.nakshatra, girl.nakshatra);
    let yoni_pts = yoni_raw(boy.nakshatra, girl.nakshatra);
    let (gana_b, gana_g) = (gana(boy.nakshatra), gana(girl.nakshatra));
    let gana_pts = gana_raw(gana_b, gana_g);
    let bhakoot = bhakoot_raw(boy.rashi, girl.rashi);
    let (nadi_b, nadi_g) = (nadi(boy.nakshatra), nadi(girl.nakshatra));
    let nadi_differs = nadi_b != nadi_g;
    let nadi_pts = if nadi_differs { 8.0 } else { 0.0 };

    let bhakoot_clean = bhakoot >= Koota::Bhakoot.max_score();
    let same_star = boy.nakshatra == girl.nakshatra;
    let star_distance = count_from(boy.nakshatra.index(), girl.nakshatra.index(), 27);

    let kootas = [
        settle(
            Koota::Varna,
            varna,
            if varna > 0.0 {
                "Boy's varna is not lower than girl's".to_string()
            } else {
                "Boy's varna is lower than girl's".to_string()
            },
            &[
                (maitri_friendly, REASON_MAITRI),
                (navamsa_friendly, REASON_NAVAMSA),
            ],
        ),
        settle(
            Koota::Vashya,
            vashya,
            match vashya {
                v if v >= 2.0 => "Same vashya group".to_string(),
                v if v >= 1.0 => "Adjacent vashya groups".to_string(),
                _ => "Different vashya groups".to_string(),
            },
            &[
                (yoni_pts >= Koota::Yoni.max_score(), REASON_YONI_PERFECT),
                (maitri_friendly, REASON_MAITRI),
                (navamsa_friendly, REASON_NAVAMSA),
            ],
        ),
        settle(
            Koota::Tara,
            tara,
            format!("Star counts {to_girl} and {to_boy}"),
            &[
                (maitri_friendly, REASON_MAITRI),
                (navamsa_friendly, REASON_NAVAMSA),
            ],
        ),
        settle(
            Koota::Yoni,
            yoni_pts,
            format!("{} and {}", yoni_name(boy.nakshatra), yoni_name(girl.nakshatra)),
            &[
                (maitri_friendly, REASON_MAITRI),
                (navamsa_friendly, REASON_NAVAMSA),
                (bhakoot_clean, REASON_BHAKOOT_CLEAN),
                (vashya >= 1.0, REASON_VASHYA),
            ],
        ),
        settle(
            Koota::Maitri,
            maitri_points,
            format!("Lord friendship {maitri_points}"),
            &[
                (navamsa_friendly, REASON_NAVAMSA),
                (bhakoot_clean, REASON_BHAKOOT_CLEAN),
            ],
        ),
        settle(
            Koota::Gana,
            gana_pts,
            format!("{} and {}", gana_b.name(), gana_g.name()),
            &[
                (star_distance >= 14, REASON_STAR_DISTANCE),
                (maitri_friendly, REASON_MAITRI),
                (navamsa_friendly, REASON_NAVAMSA),
                (bhakoot_clean, REASON_BHAKOOT_CLEAN),
            ],
        ),
        settle(
            Koota::Bhakoot,
            bhakoot,
            if bhakoot_clean {
                "Favourable rashi distance".to_string()
            } else {
                "Unfavourable rashi distance".to_string()
            },
            &[
                (maitri_friendly, REASON_MAITRI),
                (nadi_differs, REASON_NADI_DIFFERS),
            ],
        ),
        settle(
            Koota::Nadi,
            nadi_pts,
            if nadi_differs {
                "Healthy".to_string()
            } else {
                format!("Same nadi ({})", nadi_b.name())
            },
            &[
                (
                    same_star && NADI_SAME_STAR_EXCEPTIONS.contains(&boy.nakshatra),
                    REASON_NADI_EXCEPTION,
                ),
                (boy.rashi == girl.rashi && !same_star, REASON_SAME_RASHI),
                (maitri_friendly, REASON_MAITRI),
            ],
        ),
    ];

    let raw_total = kootas.iter().map(|k| k.raw_score).sum();
    let final_total: f64 = kootas.iter().map(|k| k.final_score).sum();
    let cancellation_log = kootas
        .iter()
        .filter_map(|k| {
            k.cancellation_reason.map(|reason| CancellationEntry {
                koota: k.koota,
                reason,
            })
        })
        .collect();

    let rajju = if rajju_group(boy.nakshatra) != rajju_group(girl.nakshatra) {
        RajjuStatus::Pass
    } else if maitri_friendly || boy.rashi == girl.rashi {
        RajjuStatus::Cancelled
    } else {
        RajjuStatus::Fail
    };

    let vedha = if vedha_partner(girl.nakshatra) == boy.nakshatra {
        VedhaStatus::Fail
    } else {
        VedhaStatus::Pass
    };

    let safety = if final_total > RISKY_TOTAL_THRESHOLD
        && kootas[Koota::Bhakoot.index()].final_score == 0.0
        && kootas[Koota::Nadi.index()].final_score == 0.0
    {
        SafetyFlag::Risky
    } else {
        SafetyFlag::Clear
    };

    GunaMilanResult {
        kootas,
        raw_total,
        final_total,
        maitri_points,
        maitri_friendly,
        navamsa_friendly,
        rajju,
        vedha,
        safety,
        cancellation_log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(n: Nakshatra, r: Rashi) -> MatchParty {
        MatchParty::new(n, r)
    }

    #[test]
    fn maxima_sum_to_36() {
        let total: f64 = ALL_KOOTAS.iter().map(|k| k.max_score()).sum();
        assert!((total - MAX_GUNA_POINTS).abs() < 1e-12);
    }

    #[test]
    fn ashwini_krittika_nadi_healthy() {
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Mesha),
        );
        let nadi = r.koota(Koota::Nadi);
        assert_eq!(nadi.raw_score, 8.0);
        assert_eq!(nadi.final_score, 8.0);
        assert_eq!(nadi.rationale, "Healthy");
        assert!(!nadi.is_cancelled());
    }

    #[test]
    fn ashwini_krittika_totals() {
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Mesha),
        );
        assert!((r.raw_total - 27.5).abs() < 1e-12, "raw {}", r.raw_total);
        assert!((r.final_total - 36.0).abs() < 1e-12, "final {}", r.final_total);
        assert_eq!(r.rajju, RajjuStatus::Pass);
        assert_eq!(r.vedha, VedhaStatus::Pass);
    }

    #[test]
    fn rohini_rohini_nadi_exception() {
        let r = guna_milan(
            &party(Nakshatra::Rohini, Rashi::Vrishabha),
            &party(Nakshatra::Rohini, Rashi::Vrishabha),
        );
        let nadi = r.koota(Koota::Nadi);
        assert_eq!(nadi.raw_score, 0.0);
        assert_eq!(nadi.final_score, 8.0);
        assert_eq!(nadi.cancellation_reason, Some(REASON_NADI_EXCEPTION));
        assert!(
            r.cancellation_log
                .iter()
                .any(|e| e.koota == Koota::Nadi && e.reason == REASON_NADI_EXCEPTION)
        );
        assert_eq!(r.rajju, RajjuStatus::Cancelled);
    }

    #[test]
    fn krittika_split_signs_is_risky() {
        let r = guna_milan(
            &party(Nakshatra::Krittika, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
        );
        assert_eq!(r.koota(Koota::Bhakoot).final_score, 0.0);
        assert_eq!(r.koota(Koota::Nadi).final_score, 0.0);
        assert!((r.final_total - 19.0).abs() < 1e-12, "final {}", r.final_total);
        assert_eq!(r.safety, SafetyFlag::Risky);
        assert_eq!(r.rajju, RajjuStatus::Fail);
    }

    #[test]
    fn tara_counts() {
        assert_eq!(tara_raw(Nakshatra::Ashwini, Nakshatra::Ashwini).0, 3.0);
        // 3rd from Ashwini is Krittika; the reverse count is 26 (26 % 9 = 8).
        let (pts, a, b) = tara_raw(Nakshatra::Ashwini, Nakshatra::Krittika);
        assert_eq!((a, b), (3, 26));
        assert_eq!(pts, 1.5);
    }

    #[test]
    fn gana_pairs() {
        assert_eq!(gana_raw(Gana::Deva, Gana::Manushya), 6.0);
        assert_eq!(gana_raw(Gana::Rakshasa, Gana::Deva), 1.0);
        assert_eq!(gana_raw(Gana::Manushya, Gana::Rakshasa), 0.0);
        assert_eq!(gana_raw(Gana::Rakshasa, Gana::Rakshasa), 6.0);
    }

    #[test]
    fn bhakoot_axes() {
        assert_eq!(bhakoot_raw(Rashi::Mesha, Rashi::Mesha), 7.0);
        assert_eq!(bhakoot_raw(Rashi::Mesha, Rashi::Tula), 7.0);
        assert_eq!(bhakoot_raw(Rashi::Mesha, Rashi::Vrishabha), 0.0);
        assert_eq!(bhakoot_raw(Rashi::Mesha, Rashi::Simha), 0.0);
        assert_eq!(bhakoot_raw(Rashi::Mesha, Rashi::Kanya), 0.0);
    }

    #[test]
    fn vedha_pair_fails() {
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Jyeshtha, Rashi::Vrischika),
        );
        assert_eq!(r.vedha, VedhaStatus::Fail);
    }

    #[test]
    fn log_matches_cancelled_kootas() {
        let r = guna_milan(
            &party(Nakshatra::Magha, Rashi::Simha),
            &party(Nakshatra::Shatabhisha, Rashi::Kumbha),
        );
        let cancelled = r.kootas.iter().filter(|k| k.is_cancelled()).count();
        assert_eq!(cancelled, r.cancellation_log.len());
    }

    #[test]
    fn navamsa_friendship_can_restore() {
        let boy = party(Nakshatra::Krittika, Rashi::Mesha);
        let girl = party(Nakshatra::Krittika, Rashi::Vrishabha);
        let plain = guna_milan(&boy, &girl);
        let with_d9 = guna_milan(
            &boy.with_navamsa(Rashi::Simha),
            &girl.with_navamsa(Rashi::Mesha),
        );
        assert!(with_d9.navamsa_friendly);
        assert!(with_d9.final_total >= plain.final_total);
        assert_eq!(with_d9.koota(Koota::Maitri).final_score, 5.0);
    }

    // -----------------------------------------------------------------------
    // Dosha Bhanga triggers. Unless the trigger is ordered before Maitri,
    // pairs have unfriendly Moon-sign lords and no navamsa, so the trigger
    // under test is the first one to fire.
    // -----------------------------------------------------------------------

    fn restored(r: &GunaMilanResult, koota: Koota) -> Option<&'static str> {
        let k = r.koota(koota);
        if k.is_cancelled() {
            assert_eq!(k.final_score, k.max_score);
            assert!(k.raw_score < k.max_score);
        }
        k.cancellation_reason
    }

    #[test]
    fn gana_restored_by_star_distance() {
        // Deva and Rakshasa, girl's star 14th from the boy's.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Chitra, Rashi::Kanya),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(r.koota(Koota::Gana).raw_score, 1.0);
        assert_eq!(restored(&r, Koota::Gana), Some(REASON_STAR_DISTANCE));
    }

    #[test]
    fn gana_stays_low_for_near_star() {
        // Same Deva/Rakshasa clash, star only 3rd, Bhakoot afflicted.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
        );
        assert_eq!(restored(&r, Koota::Gana), None);
        assert_eq!(r.koota(Koota::Gana).final_score, 1.0);
    }

    #[test]
    fn yoni_restored_by_vashya() {
        // Mars and Venus lords (3 points), Bhakoot 2/12, same vashya group.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(r.koota(Koota::Bhakoot).raw_score, 0.0);
        assert_eq!(r.koota(Koota::Yoni).raw_score, 2.0);
        assert_eq!(restored(&r, Koota::Yoni), Some(REASON_VASHYA));
    }

    #[test]
    fn yoni_restored_by_clean_bhakoot() {
        // Mars and Mercury lords, Bhakoot 3/11.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Mrigashira, Rashi::Mithuna),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(r.koota(Koota::Bhakoot).raw_score, 7.0);
        assert_eq!(r.koota(Koota::Yoni).raw_score, 2.0);
        assert_eq!(restored(&r, Koota::Yoni), Some(REASON_BHAKOOT_CLEAN));
    }

    #[test]
    fn maitri_restored_by_clean_bhakoot() {
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Mrigashira, Rashi::Mithuna),
        );
        assert_eq!(r.koota(Koota::Maitri).raw_score, 0.5);
        assert_eq!(restored(&r, Koota::Maitri), Some(REASON_BHAKOOT_CLEAN));
    }

    #[test]
    fn vashya_restored_by_perfect_yoni() {
        // Both Horse yoni; Mesha and Kumbha are adjacent vashya groups.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Shatabhisha, Rashi::Kumbha),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(r.koota(Koota::Yoni).raw_score, 4.0);
        assert_eq!(r.koota(Koota::Vashya).raw_score, 1.0);
        assert_eq!(restored(&r, Koota::Vashya), Some(REASON_YONI_PERFECT));
    }

    #[test]
    fn bhakoot_restored_by_differing_nadi() {
        // Adi and Antya nadi across a 2/12 axis.
        let r = guna_milan(
            &party(Nakshatra::Ashwini, Rashi::Mesha),
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(r.koota(Koota::Bhakoot).raw_score, 0.0);
        assert_eq!(restored(&r, Koota::Bhakoot), Some(REASON_NADI_DIFFERS));
    }

    #[test]
    fn bhakoot_stays_afflicted_with_same_nadi() {
        // Krittika pada 1 and Rohini share Antya nadi across a 2/12 axis.
        let r = guna_milan(
            &party(Nakshatra::Krittika, Rashi::Mesha),
            &party(Nakshatra::Rohini, Rashi::Vrishabha),
        );
        assert!(!r.maitri_friendly);
        assert_eq!(restored(&r, Koota::Bhakoot), None);
        assert_eq!(r.koota(Koota::Bhakoot).final_score, 0.0);
    }

    #[test]
    fn nadi_restored_by_shared_rashi() {
        // Krittika and Rohini are both Antya; same sign, different stars.
        let r = guna_milan(
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
            &party(Nakshatra::Rohini, Rashi::Vrishabha),
        );
        assert_eq!(r.koota(Koota::Nadi).raw_score, 0.0);
        assert_eq!(restored(&r, Koota::Nadi), Some(REASON_SAME_RASHI));
    }

    #[test]
    fn non_exception_same_star_falls_to_maitri() {
        // Krittika is not an exception star: the shared-rashi rule needs
        // different stars, so only Maitri can restore it.
        let r = guna_milan(
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
            &party(Nakshatra::Krittika, Rashi::Vrishabha),
        );
        assert_eq!(restored(&r, Koota::Nadi), Some(REASON_MAITRI));
    }
}
