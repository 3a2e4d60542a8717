//! Place and UTC-offset resolution.
//!
//! Geocoding and timezone lookup live outside this workspace; callers plug
//! them in through [`PlaceResolver`]. Lookups are never fatal: when the
//! resolver is absent or fails, [`resolve_offset`] falls back to the offset
//! the user typed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use milan_time::MAX_UTC_OFFSET_HOURS;
use milan_vedic_base::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::{MilanError, ResolveError};

/// A resolved birth place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Offset in force at the requested local time, DST included.
    pub utc_offset_hours: f64,
    /// IANA zone name when the service reports one.
    pub timezone: Option<String>,
}

impl Place {
    pub fn location(&self) -> Result<GeoLocation, MilanError> {
        Ok(GeoLocation::new(self.latitude_deg, self.longitude_deg)?)
    }
}

/// Geocoding plus timezone lookup for a city at a local date/time.
pub trait PlaceResolver: Send + Sync {
    fn locate(&self, city: &str, country: &str, local: NaiveDateTime)
    -> Result<Place, ResolveError>;
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Cache behaviour of [`CachedResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// How long a successful lookup stays valid.
    pub ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
        }
    }
}

/// (city, country, local time). The offset depends on the date through DST,
/// so a place found for one birth is never reused for another instant.
type CacheKey = (String, String, NaiveDateTime);

/// Wraps a resolver with a TTL cache keyed by place and local time.
///
/// Only successful lookups are cached. Expired entries are dropped on
/// lookup and pruned whenever a new entry is stored.
pub struct CachedResolver<R> {
    inner: R,
    config: ResolverConfig,
    cache: Mutex<HashMap<CacheKey, (Instant, Place)>>,
}

impl<R: PlaceResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ResolverConfig::default())
    }

    pub fn with_config(inner: R, config: ResolverConfig) -> Self {
        Self {
            inner,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of entries currently held. Entries that expired since the last
    /// insert are counted until the next one prunes them.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, (Instant, Place)>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn cache_key(city: &str, country: &str, local: NaiveDateTime) -> CacheKey {
    (city.trim().to_lowercase(), country.trim().to_lowercase(), local)
}

impl<R: PlaceResolver> PlaceResolver for CachedResolver<R> {
    fn locate(
        &self,
        city: &str,
        country: &str,
        local: NaiveDateTime,
    ) -> Result<Place, ResolveError> {
        let key = cache_key(city, country, local);
        let ttl = self.config.ttl;
        {
            let mut cache = self.lock();
            let fresh = cache
                .get(&key)
                .filter(|(at, _)| at.elapsed() < ttl)
                .map(|(_, place)| place.clone());
            if let Some(place) = fresh {
                return Ok(place);
            }
            cache.remove(&key);
        }
        let place = self.inner.locate(city, country, local)?;
        let mut cache = self.lock();
        cache.retain(|_, (at, _)| at.elapsed() < ttl);
        cache.insert(key, (Instant::now(), place.clone()));
        Ok(place)
    }
}

// ---------------------------------------------------------------------------
// Offset resolution
// ---------------------------------------------------------------------------

/// Outcome of [`resolve_offset`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOffset {
    pub utc_offset_hours: f64,
    /// The resolved place, when the lookup succeeded.
    pub place: Option<Place>,
    /// `false` when the manual offset was used.
    pub resolved: bool,
    /// One-line status for display.
    pub message: String,
}

/// UTC offset for a birth, preferring the resolver over the manual value.
///
/// Blank city, missing resolver, lookup failure and an implausible offset
/// from the service all fall back to `manual_offset_hours`.
pub fn resolve_offset(
    resolver: Option<&dyn PlaceResolver>,
    city: &str,
    country: &str,
    local: NaiveDateTime,
    manual_offset_hours: f64,
) -> ResolvedOffset {
    let manual = |reason: String| ResolvedOffset {
        utc_offset_hours: manual_offset_hours,
        place: None,
        resolved: false,
        message: format!("Using manual offset {manual_offset_hours:+} h ({reason})"),
    };

    if city.trim().is_empty() {
        return manual("no city given".to_string());
    }
    let Some(resolver) = resolver else {
        return manual("no resolver configured".to_string());
    };
    match resolver.locate(city, country, local) {
        Ok(place)
            if place.utc_offset_hours.is_finite()
                && place.utc_offset_hours.abs() <= MAX_UTC_OFFSET_HOURS =>
        {
            ResolvedOffset {
                utc_offset_hours: place.utc_offset_hours,
                message: format!("Found: {}", city.trim()),
                place: Some(place),
                resolved: true,
            }
        }
        Ok(place) => manual(format!(
            "resolver returned offset {} h",
            place.utc_offset_hours
        )),
        Err(e) => manual(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    impl PlaceResolver for Counting {
        fn locate(
            &self,
            city: &str,
            _country: &str,
            _local: NaiveDateTime,
        ) -> Result<Place, ResolveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if city.eq_ignore_ascii_case("atlantis") {
                return Err(ResolveError::NotFound(city.to_string()));
            }
            Ok(Place {
                latitude_deg: 28.61,
                longitude_deg: 77.21,
                utc_offset_hours: 5.5,
                timezone: Some("Asia/Kolkata".to_string()),
            })
        }
    }

    fn counting() -> Counting {
        Counting {
            calls: AtomicUsize::new(0),
        }
    }

    fn noon() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn key_is_case_and_space_insensitive() {
        assert_eq!(
            cache_key(" Delhi ", "INDIA", noon()),
            cache_key("delhi", "india", noon())
        );
    }

    #[test]
    fn second_lookup_hits_cache() {
        let r = CachedResolver::new(counting());
        r.locate("Delhi", "India", noon()).unwrap();
        r.locate("delhi ", "india", noon()).unwrap();
        assert_eq!(r.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn zero_ttl_always_refreshes() {
        let r = CachedResolver::with_config(counting(), ResolverConfig { ttl: Duration::ZERO });
        r.locate("Delhi", "India", noon()).unwrap();
        r.locate("Delhi", "India", noon()).unwrap();
        assert_eq!(r.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let r = CachedResolver::new(counting());
        assert!(r.locate("Atlantis", "", noon()).is_err());
        assert!(r.locate("Atlantis", "", noon()).is_err());
        assert_eq!(r.inner().calls.load(Ordering::SeqCst), 2);
        assert!(r.is_empty());
    }

    /// Eastern time: standard offset in winter, daylight offset in summer.
    struct Seasonal;

    impl PlaceResolver for Seasonal {
        fn locate(
            &self,
            _city: &str,
            _country: &str,
            local: NaiveDateTime,
        ) -> Result<Place, ResolveError> {
            let summer = (4..=10).contains(&local.month());
            Ok(Place {
                latitude_deg: 40.71,
                longitude_deg: -74.01,
                utc_offset_hours: if summer { -4.0 } else { -5.0 },
                timezone: Some("America/New_York".to_string()),
            })
        }
    }

    #[test]
    fn offset_follows_birth_date_through_cache() {
        let r = CachedResolver::new(Seasonal);
        let jan = noon();
        let jul = chrono::NaiveDate::from_ymd_opt(1990, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let winter = r.locate("New York", "USA", jan).unwrap();
        let summer = r.locate("New York", "USA", jul).unwrap();
        assert!((winter.utc_offset_hours + 5.0).abs() < 1e-12);
        assert!((summer.utc_offset_hours + 4.0).abs() < 1e-12);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn expired_entries_are_pruned_on_insert() {
        let r = CachedResolver::with_config(
            counting(),
            ResolverConfig {
                ttl: Duration::from_millis(1),
            },
        );
        r.locate("Delhi", "India", noon()).unwrap();
        r.locate("Mumbai", "India", noon()).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        r.locate("Pune", "India", noon()).unwrap();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn clear_empties_cache() {
        let r = CachedResolver::new(counting());
        r.locate("Delhi", "India", noon()).unwrap();
        r.clear();
        assert!(r.is_empty());
    }

    #[test]
    fn resolved_offset_uses_place() {
        let c = counting();
        let out = resolve_offset(Some(&c), "Delhi", "India", noon(), 0.0);
        assert!(out.resolved);
        assert!((out.utc_offset_hours - 5.5).abs() < 1e-12);
        assert_eq!(out.message, "Found: Delhi");
    }

    #[test]
    fn missing_resolver_falls_back() {
        let out = resolve_offset(None, "Delhi", "India", noon(), 5.5);
        assert!(!out.resolved);
        assert!(out.place.is_none());
        assert!((out.utc_offset_hours - 5.5).abs() < 1e-12);
    }

    #[test]
    fn failed_lookup_falls_back() {
        let c = counting();
        let out = resolve_offset(Some(&c), "Atlantis", "", noon(), -3.0);
        assert!(!out.resolved);
        assert!((out.utc_offset_hours + 3.0).abs() < 1e-12);
        assert!(out.message.contains("place not found"));
    }

    #[test]
    fn blank_city_skips_resolver() {
        let c = counting();
        let out = resolve_offset(Some(&c), "  ", "India", noon(), 1.0);
        assert!(!out.resolved);
        assert_eq!(c.calls.load(Ordering::SeqCst), 0);
    }
}
