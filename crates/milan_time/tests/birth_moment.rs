//! Birth-moment validation and JD conversion across calendar edge cases.

use milan_time::{BirthMoment, J2000_JD, TimeError, jd_to_calendar, local_sidereal_time_rad};

#[test]
fn ist_birth_converts_to_ut_jd() {
    // 1990-01-01 06:00 IST = 00:30 UT
    let m = BirthMoment::from_parts(1990, 1, 1, 6, 0, 0, 5.5).unwrap();
    let expected = 2_447_892.5 + 0.5 / 24.0;
    assert!((m.jd_ut() - expected).abs() < 1e-8, "jd = {}", m.jd_ut());
}

#[test]
fn leap_day_accepted_only_in_leap_years() {
    assert!(BirthMoment::from_parts(2000, 2, 29, 0, 0, 0, 0.0).is_ok());
    assert!(BirthMoment::from_parts(1900, 2, 29, 0, 0, 0, 0.0).is_err());
}

#[test]
fn month_thirteen_rejected() {
    let err = BirthMoment::from_parts(2020, 13, 1, 0, 0, 0, 0.0).unwrap_err();
    assert_eq!(
        err,
        TimeError::InvalidDate {
            year: 2020,
            month: 13,
            day: 1
        }
    );
}

#[test]
fn with_offset_keeps_local_time() {
    let m = BirthMoment::from_parts(2001, 5, 5, 10, 0, 0, 0.0).unwrap();
    let shifted = m.with_offset(-4.0).unwrap();
    assert_eq!(shifted.local(), m.local());
    assert!((shifted.jd_ut() - m.jd_ut() - 4.0 / 24.0).abs() < 1e-9);
}

#[test]
fn jd_calendar_at_j2000() {
    let (y, mo, d) = jd_to_calendar(J2000_JD);
    assert_eq!((y, mo), (2000, 1));
    assert!((d - 1.5).abs() < 1e-12);
}

#[test]
fn lst_advances_with_longitude() {
    let m = BirthMoment::from_parts(2010, 3, 21, 12, 0, 0, 0.0).unwrap();
    let greenwich = local_sidereal_time_rad(m.jd_ut(), 0.0);
    let delhi = local_sidereal_time_rad(m.jd_ut(), 77.209);
    let diff = (delhi - greenwich).rem_euclid(std::f64::consts::TAU).to_degrees();
    assert!((diff - 77.209).abs() < 1e-9);
}
