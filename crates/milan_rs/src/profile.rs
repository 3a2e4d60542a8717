//! Validated birth data.

use chrono::NaiveDateTime;
use milan_time::BirthMoment;
use milan_vedic_base::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::MilanError;

/// One person's birth data: when and where.
///
/// Construction validates everything, so a `BirthProfile` always describes
/// a real instant at a real place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    name: String,
    moment: BirthMoment,
    location: GeoLocation,
}

impl BirthProfile {
    pub fn new(
        name: impl Into<String>,
        moment: BirthMoment,
        location: GeoLocation,
    ) -> Result<Self, MilanError> {
        location.validate()?;
        Ok(Self {
            name: name.into(),
            moment,
            location,
        })
    }

    /// Build from raw fields as entered on a form.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, MilanError> {
        let moment = BirthMoment::from_parts(year, month, day, hour, minute, 0, utc_offset_hours)?;
        let location = GeoLocation::new(latitude_deg, longitude_deg)?;
        Self::new(name, moment, location)
    }

    /// Build from a local date/time string `YYYY-MM-DD HH:MM[:SS]`.
    pub fn parse(
        name: impl Into<String>,
        local: &str,
        utc_offset_hours: f64,
        location: GeoLocation,
    ) -> Result<Self, MilanError> {
        let local = parse_local(local)?;
        let moment = BirthMoment::new(local, utc_offset_hours)?;
        Self::new(name, moment, location)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn moment(&self) -> &BirthMoment {
        &self.moment
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// UT Julian Date of birth.
    pub fn jd_ut(&self) -> f64 {
        self.moment.jd_ut()
    }

    /// Same person with a corrected UTC offset.
    pub fn with_offset(self, utc_offset_hours: f64) -> Result<Self, MilanError> {
        Ok(Self {
            moment: self.moment.with_offset(utc_offset_hours)?,
            ..self
        })
    }
}

/// Parse `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS` (a `T` separator is
/// accepted too).
pub fn parse_local(s: &str) -> Result<NaiveDateTime, MilanError> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| MilanError::InvalidInput(format!("cannot parse date/time '{s}'")))
}
