//! Geocentric Moon from a truncated ELP-2000/82 series.
//!
//! Mean elements plus the principal periodic terms of Meeus, "Astronomical
//! Algorithms" (2nd ed), Chapter 47. Truncation keeps longitude within
//! ~0.01° of the full series, ample for 3°20′ pada bins.
//!
//! Output is referred to the mean equinox of date (no nutation).

use milan_time::jd_to_centuries;

/// Periodic term in longitude (1e-6 deg) and distance (1e-3 km),
/// argument `d·D + m·M + mp·M′ + f·F`.
struct LonDistTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sl: f64,
    sr: f64,
}

/// Periodic term in latitude (1e-6 deg).
struct LatTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sb: f64,
}

const fn ld(d: i8, m: i8, mp: i8, f: i8, sl: f64, sr: f64) -> LonDistTerm {
    LonDistTerm { d, m, mp, f, sl, sr }
}

const fn lb(d: i8, m: i8, mp: i8, f: i8, sb: f64) -> LatTerm {
    LatTerm { d, m, mp, f, sb }
}

#[rustfmt::skip]
const LON_DIST: [LonDistTerm; 34] = [
    ld(0, 0, 1, 0, 6_288_774.0, -20_905_355.0),
    ld(2, 0, -1, 0, 1_274_027.0, -3_699_111.0),
    ld(2, 0, 0, 0, 658_314.0, -2_955_968.0),
    ld(0, 0, 2, 0, 213_618.0, -569_925.0),
    ld(0, 1, 0, 0, -185_116.0, 48_888.0),
    ld(0, 0, 0, 2, -114_332.0, -3_149.0),
    ld(2, 0, -2, 0, 58_793.0, 246_158.0),
    ld(2, -1, -1, 0, 57_066.0, -152_138.0),
    ld(2, 0, 1, 0, 53_322.0, -170_733.0),
    ld(2, -1, 0, 0, 45_758.0, -204_586.0),
    ld(0, 1, -1, 0, -40_923.0, -129_620.0),
    ld(1, 0, 0, 0, -34_720.0, 108_743.0),
    ld(0, 1, 1, 0, -30_383.0, 104_755.0),
    ld(2, 0, 0, -2, 15_327.0, 10_321.0),
    ld(0, 0, 1, 2, -12_528.0, 0.0),
    ld(0, 0, 1, -2, 10_980.0, 79_661.0),
    ld(4, 0, -1, 0, 10_675.0, -34_782.0),
    ld(0, 0, 3, 0, 10_034.0, -23_210.0),
    ld(4, 0, -2, 0, 8_548.0, -21_636.0),
    ld(2, 1, -1, 0, -7_888.0, 24_208.0),
    ld(2, 1, 0, 0, -6_766.0, 30_824.0),
    ld(1, 0, -1, 0, -5_163.0, -8_379.0),
    ld(1, 1, 0, 0, 4_987.0, -16_675.0),
    ld(2, -1, 1, 0, 4_036.0, -12_831.0),
    ld(2, 0, 2, 0, 3_994.0, -10_445.0),
    ld(4, 0, 0, 0, 3_861.0, -11_650.0),
    ld(2, 0, -3, 0, 3_665.0, 14_403.0),
    ld(0, 1, -2, 0, -2_689.0, -7_003.0),
    ld(2, 0, -1, 2, -2_602.0, 0.0),
    ld(2, -1, -2, 0, 2_390.0, 10_056.0),
    ld(1, 0, 1, 0, -2_348.0, 6_322.0),
    ld(2, -2, 0, 0, 2_236.0, -9_884.0),
    ld(0, 1, 2, 0, -2_120.0, 5_751.0),
    ld(0, 2, 0, 0, -2_069.0, 0.0),
];

#[rustfmt::skip]
const LAT: [LatTerm; 15] = [
    lb(0, 0, 0, 1, 5_128_122.0),
    lb(0, 0, 1, 1, 280_602.0),
    lb(0, 0, 1, -1, 277_693.0),
    lb(2, 0, 0, -1, 173_237.0),
    lb(2, 0, -1, 1, 55_413.0),
    lb(2, 0, -1, -1, 46_271.0),
    lb(2, 0, 0, 1, 32_573.0),
    lb(0, 0, 2, 1, 17_198.0),
    lb(2, 0, 1, -1, 9_266.0),
    lb(0, 0, 2, -1, 8_822.0),
    lb(2, -1, 0, -1, 8_216.0),
    lb(2, 0, -2, -1, 4_324.0),
    lb(2, 0, 1, 1, 4_200.0),
    lb(2, 1, 0, -1, -3_359.0),
    lb(2, -1, -1, 1, 2_463.0),
];

/// Geocentric Moon: longitude and latitude (deg), distance (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Moon position for a Julian Date, mean equinox of date.
pub fn moon_position(jd: f64) -> LunarPosition {
    let t = jd_to_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;

    let arg = |dd: i8, mm: i8, mpp: i8, ff: i8| -> f64 {
        (f64::from(dd) * d + f64::from(mm) * m + f64::from(mpp) * mp + f64::from(ff) * f)
            .to_radians()
    };
    // Terms involving the solar anomaly M shrink with Earth's eccentricity.
    let ecc_factor = |mm: i8| e.powi(i32::from(mm.unsigned_abs()));

    let mut sl = 0.0;
    let mut sr = 0.0;
    for term in &LON_DIST {
        let x = arg(term.d, term.m, term.mp, term.f);
        let k = ecc_factor(term.m);
        sl += term.sl * k * x.sin();
        sr += term.sr * k * x.cos();
    }
    sl += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let mut sb = 0.0;
    for term in &LAT {
        sb += term.sb * ecc_factor(term.m) * arg(term.d, term.m, term.mp, term.f).sin();
    }
    sb += -2235.0 * lp.to_radians().sin()
        + 382.0 * a3.to_radians().sin()
        + 175.0 * (a1 - f).to_radians().sin()
        + 175.0 * (a1 + f).to_radians().sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    LunarPosition {
        lon_deg: (lp + sl / 1e6).rem_euclid(360.0),
        lat_deg: sb / 1e6,
        distance_km: 385_000.56 + sr / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 47.a: 1992 April 12, 0h TD.
    const JD_1992_04_12: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_longitude() {
        let p = moon_position(JD_1992_04_12);
        assert!((p.lon_deg - 133.162_655).abs() < 0.01, "λ = {}", p.lon_deg);
    }

    #[test]
    fn meeus_example_latitude() {
        let p = moon_position(JD_1992_04_12);
        assert!((p.lat_deg - -3.229_126).abs() < 0.01, "β = {}", p.lat_deg);
    }

    #[test]
    fn meeus_example_distance() {
        let p = moon_position(JD_1992_04_12);
        assert!((p.distance_km - 368_409.7).abs() < 50.0, "Δ = {}", p.distance_km);
    }

    #[test]
    fn longitude_in_range_over_a_month() {
        for i in 0..60 {
            let p = moon_position(2_460_000.5 + i as f64 * 0.5);
            assert!((0.0..360.0).contains(&p.lon_deg));
            assert!(p.lat_deg.abs() < 5.4);
            assert!(p.distance_km > 355_000.0 && p.distance_km < 407_000.0);
        }
    }
}
