//! Julian Date arithmetic on the proleptic Gregorian calendar.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Calendar date (Gregorian) to Julian Date.
///
/// `day` may carry a fractional part for the time of day, so
/// `calendar_to_jd(2000, 1, 1.5) == 2451545.0`.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Date to Gregorian calendar `(year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian years elapsed since J2000.0.
pub fn jd_to_julian_years(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 (Sputnik launch)
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year_shift() {
        let jd = calendar_to_jd(1987, 1, 27.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn calendar_roundtrip() {
        for &(y, m, d) in &[(1990, 1, 1.25), (2024, 2, 29.75), (1900, 3, 1.0), (2049, 12, 31.5)] {
            let (y2, m2, d2) = jd_to_calendar(calendar_to_jd(y, m, d));
            assert_eq!((y2, m2), (y, m));
            assert!((d2 - d).abs() < 1e-8, "{y}-{m}: {d2} vs {d}");
        }
    }

    #[test]
    fn centuries_and_years_agree() {
        let jd = J2000_JD + 36_525.0;
        assert!((jd_to_centuries(jd) - 1.0).abs() < 1e-15);
        assert!((jd_to_julian_years(jd) - 100.0).abs() < 1e-12);
    }
}
