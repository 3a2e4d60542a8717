//! Offline place table loaded from a JSON file.
//!
//! ```json
//! [
//!   {"city": "Delhi", "country": "India", "latitude_deg": 28.6139,
//!    "longitude_deg": 77.209, "utc_offset_hours": 5.5, "timezone": "Asia/Kolkata"}
//! ]
//! ```

use std::path::Path;

use chrono::NaiveDateTime;
use milan_rs::{Place, PlaceResolver, ResolveError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PlaceEntry {
    city: String,
    #[serde(default)]
    country: String,
    #[serde(flatten)]
    place: Place,
}

/// Fixed offsets per city; no DST rules.
#[derive(Debug)]
pub struct PlaceTable {
    entries: Vec<PlaceEntry>,
}

impl PlaceTable {
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(text)?,
        })
    }
}

impl PlaceResolver for PlaceTable {
    fn locate(
        &self,
        city: &str,
        country: &str,
        _local: NaiveDateTime,
    ) -> Result<Place, ResolveError> {
        let (city, country) = (city.trim(), country.trim());
        self.entries
            .iter()
            .find(|e| {
                e.city.eq_ignore_ascii_case(city)
                    && (country.is_empty() || e.country.eq_ignore_ascii_case(country))
            })
            .map(|e| e.place.clone())
            .ok_or_else(|| ResolveError::NotFound(format!("{city}, {country}")))
    }
}
