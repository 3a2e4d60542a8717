//! Local civil birth time with a UTC offset.
//!
//! [`BirthMoment`] is the validated entry point for every chart computation:
//! malformed dates, impossible clock times and out-of-range offsets are
//! rejected here, before any astronomy runs.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest UTC offset in use anywhere (Line Islands, UTC+14).
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Local civil date/time of birth plus the UTC offset in force there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    local: NaiveDateTime,
    utc_offset_hours: f64,
}

impl BirthMoment {
    /// Wrap an already-parsed local date/time.
    pub fn new(local: NaiveDateTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        validate_offset(utc_offset_hours)?;
        Ok(Self {
            local,
            utc_offset_hours,
        })
    }

    /// Build from calendar components, validating each one.
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTime {
            hour,
            minute,
            second,
        })?;
        Self::new(date.and_time(time), utc_offset_hours)
    }

    /// Same local time, different offset (e.g. after a timezone lookup).
    pub fn with_offset(self, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(self.local, utc_offset_hours)
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// The instant expressed in UTC.
    pub fn utc(&self) -> NaiveDateTime {
        let offset_s = (self.utc_offset_hours * 3600.0).round() as i64;
        self.local - TimeDelta::seconds(offset_s)
    }

    /// UT Julian Date of the instant.
    pub fn jd_ut(&self) -> f64 {
        jd_from_naive_utc(self.utc())
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{} UTC{sign}{:02}:{:02}",
            self.local.format("%Y-%m-%d %H:%M:%S"),
            total_min / 60,
            total_min % 60
        )
    }
}

fn validate_offset(h: f64) -> Result<(), TimeError> {
    if !h.is_finite() || h.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(TimeError::InvalidOffset(h));
    }
    Ok(())
}

/// Julian Date of a UTC calendar instant.
pub fn jd_from_naive_utc(dt: NaiveDateTime) -> f64 {
    let secs = dt.num_seconds_from_midnight() as f64 + f64::from(dt.nanosecond()) * 1e-9;
    calendar_to_jd(dt.year(), dt.month(), dt.day() as f64 + secs / SECONDS_PER_DAY)
}

/// UTC calendar instant of a Julian Date, to the nearest millisecond.
pub fn naive_utc_from_jd(jd: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::InvalidJulianDate(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis)
        .map(|d| d.naive_utc())
        .ok_or(TimeError::InvalidJulianDate(jd))
}
