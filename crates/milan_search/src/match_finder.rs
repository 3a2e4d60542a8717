//! Exhaustive best-match search over all 27 × 4 nakshatra padas.

use milan_vedic_base::{
    ALL_NAKSHATRAS_27, MatchParty, Nakshatra, RajjuStatus, Rashi, SafetyFlag, VedhaStatus,
    guna_milan, navamsa_rashi, pada_midpoint_longitude, rashi_index,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Which side of the match the fixed party is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Fixed party is the boy; candidates are girls.
    Male,
    /// Fixed party is the girl; candidates are boys.
    Female,
}

/// Score used to rank candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Points before Dosha Bhanga.
    Raw,
    /// Points after cancellations.
    #[default]
    Final,
}

/// One ranked candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub rashi: Rashi,
    pub raw_total: f64,
    pub final_total: f64,
    pub rajju: RajjuStatus,
    pub vedha: VedhaStatus,
    pub safety: SafetyFlag,
}

impl MatchCandidate {
    fn key(&self, sort: SortKey) -> f64 {
        match sort {
            SortKey::Raw => self.raw_total,
            SortKey::Final => self.final_total,
        }
    }
}

/// Fixed party of a search, given by indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSearch {
    /// 0..=26
    pub nakshatra_index: u8,
    /// 0..=11, the rashi the pada falls in.
    pub rashi_index: u8,
    /// 1..=4
    pub pada: u8,
    pub gender: Gender,
    pub sort: SortKey,
}

impl MatchSearch {
    /// Resolve the indices into the fixed party, navamsa from the pada
    /// midpoint.
    fn source_party(&self) -> Result<MatchParty, SearchError> {
        if self.nakshatra_index > 26 {
            return Err(SearchError::InvalidInput(format!(
                "nakshatra index {} outside 0..=26",
                self.nakshatra_index
            )));
        }
        if self.rashi_index > 11 {
            return Err(SearchError::InvalidInput(format!(
                "rashi index {} outside 0..=11",
                self.rashi_index
            )));
        }
        let nakshatra = Nakshatra::from_index(self.nakshatra_index);
        let rashi = Rashi::from_index(self.rashi_index);
        let mid = pada_midpoint_longitude(nakshatra, self.pada).ok_or_else(|| {
            SearchError::InvalidInput(format!("pada {} outside 1..=4", self.pada))
        })?;
        // Nine padas per rashi: the pada alone fixes the sign.
        let expected = Rashi::from_index(rashi_index(mid));
        if rashi != expected {
            return Err(SearchError::InvalidInput(format!(
                "{} pada {} falls in {}, not {}",
                nakshatra.name(),
                self.pada,
                expected.name(),
                rashi.name()
            )));
        }
        Ok(MatchParty::new(nakshatra, rashi).with_navamsa(navamsa_rashi(mid)))
    }
}

/// Score every nakshatra pada against the fixed party, best first.
///
/// All 108 candidates are returned. The sort is stable, so equal scores
/// keep zodiac order.
pub fn find_matches(search: &MatchSearch) -> Result<Vec<MatchCandidate>, SearchError> {
    let source = search.source_party()?;

    let mut candidates = Vec::with_capacity(27 * 4);
    for nakshatra in ALL_NAKSHATRAS_27 {
        for pada in 1..=4u8 {
            let Some(candidate) = MatchParty::from_pada(nakshatra, pada) else {
                continue;
            };
            let (boy, girl) = match search.gender {
                Gender::Male => (&source, &candidate),
                Gender::Female => (&candidate, &source),
            };
            let r = guna_milan(boy, girl);
            candidates.push(MatchCandidate {
                nakshatra,
                pada,
                rashi: candidate.rashi,
                raw_total: r.raw_total,
                final_total: r.final_total,
                rajju: r.rajju,
                vedha: r.vedha,
                safety: r.safety,
            });
        }
    }

    candidates.sort_by(|a, b| b.key(search.sort).total_cmp(&a.key(search.sort)));
    Ok(candidates)
}

/// The first `n` candidates.
pub fn top_matches(mut candidates: Vec<MatchCandidate>, n: usize) -> Vec<MatchCandidate> {
    candidates.truncate(n);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(nak: u8, rashi: u8, pada: u8, gender: Gender, sort: SortKey) -> MatchSearch {
        MatchSearch {
            nakshatra_index: nak,
            rashi_index: rashi,
            pada,
            gender,
            sort,
        }
    }

    #[test]
    fn returns_all_108_sorted() {
        let v = find_matches(&search(3, 1, 2, Gender::Male, SortKey::Final)).unwrap();
        assert_eq!(v.len(), 108);
        for w in v.windows(2) {
            assert!(w[0].final_total >= w[1].final_total);
        }
    }

    #[test]
    fn raw_sort_orders_by_raw() {
        let v = find_matches(&search(10, 4, 1, Gender::Female, SortKey::Raw)).unwrap();
        for w in v.windows(2) {
            assert!(w[0].raw_total >= w[1].raw_total);
        }
    }

    #[test]
    fn ties_keep_zodiac_order() {
        let v = find_matches(&search(0, 0, 1, Gender::Male, SortKey::Final)).unwrap();
        for w in v.windows(2) {
            if w[0].final_total == w[1].final_total {
                let a = (w[0].nakshatra.index(), w[0].pada);
                let b = (w[1].nakshatra.index(), w[1].pada);
                assert!(a < b, "{a:?} before {b:?}");
            }
        }
    }

    #[test]
    fn candidate_rashi_follows_pada() {
        let v = find_matches(&search(0, 0, 1, Gender::Male, SortKey::Final)).unwrap();
        let k1 = v
            .iter()
            .find(|c| c.nakshatra == Nakshatra::Krittika && c.pada == 1)
            .unwrap();
        let k2 = v
            .iter()
            .find(|c| c.nakshatra == Nakshatra::Krittika && c.pada == 2)
            .unwrap();
        assert_eq!(k1.rashi, Rashi::Mesha);
        assert_eq!(k2.rashi, Rashi::Vrishabha);
    }

    #[test]
    fn gender_picks_the_boy() {
        let source = MatchParty::from_pada(Nakshatra::Rohini, 2).unwrap();
        let candidate = MatchParty::from_pada(Nakshatra::Hasta, 3).unwrap();
        let pick = |v: Vec<MatchCandidate>| {
            v.into_iter()
                .find(|c| c.nakshatra == Nakshatra::Hasta && c.pada == 3)
                .unwrap()
        };

        let male = pick(find_matches(&search(3, 1, 2, Gender::Male, SortKey::Raw)).unwrap());
        assert_eq!(male.raw_total, guna_milan(&source, &candidate).raw_total);

        let female = pick(find_matches(&search(3, 1, 2, Gender::Female, SortKey::Raw)).unwrap());
        assert_eq!(female.raw_total, guna_milan(&candidate, &source).raw_total);
    }

    #[test]
    fn invalid_indices_rejected() {
        for s in [
            search(27, 0, 1, Gender::Male, SortKey::Final),
            search(0, 12, 1, Gender::Male, SortKey::Final),
            search(0, 0, 0, Gender::Male, SortKey::Final),
            search(0, 0, 5, Gender::Male, SortKey::Final),
            search(0, 5, 1, Gender::Male, SortKey::Final),
            // Krittika pada 1 lies wholly in Mesha.
            search(2, 1, 1, Gender::Male, SortKey::Final),
            search(2, 0, 3, Gender::Male, SortKey::Final),
        ] {
            assert!(matches!(find_matches(&s), Err(SearchError::InvalidInput(_))));
        }
    }

    #[test]
    fn straddling_nakshatra_accepts_its_pada_sign() {
        assert!(find_matches(&search(2, 0, 1, Gender::Male, SortKey::Final)).is_ok());
        assert!(find_matches(&search(2, 1, 2, Gender::Male, SortKey::Final)).is_ok());
    }

    #[test]
    fn limit_truncates() {
        let v = find_matches(&search(3, 1, 2, Gender::Male, SortKey::Final)).unwrap();
        let best = v[0];
        let top = top_matches(v, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], best);
    }
}
