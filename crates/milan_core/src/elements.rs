//! Keplerian mean elements for the classical planets.
//!
//! Elements and rates are referred to the mean ecliptic and equinox of
//! J2000 and are valid 1800–2050 AD, degrading gracefully outside.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets", JPL Solar System Dynamics, Table 1.

use std::f64::consts::TAU;

use crate::EngineError;

/// One element set: value at J2000 and rate per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerElements {
    /// Semi-major axis (au).
    pub a: [f64; 2],
    /// Eccentricity.
    pub e: [f64; 2],
    /// Inclination (deg).
    pub i: [f64; 2],
    /// Mean longitude (deg).
    pub l: [f64; 2],
    /// Longitude of perihelion (deg).
    pub peri: [f64; 2],
    /// Longitude of ascending node (deg).
    pub node: [f64; 2],
}

pub const MERCURY: KeplerElements = KeplerElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

pub const VENUS: KeplerElements = KeplerElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

/// Earth–Moon barycentre.
pub const EARTH_MOON_BARY: KeplerElements = KeplerElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

pub const MARS: KeplerElements = KeplerElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

pub const JUPITER: KeplerElements = KeplerElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

pub const SATURN: KeplerElements = KeplerElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

fn at(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

/// Solve Kepler's equation `M = E − e sin E` by Newton iteration.
pub fn solve_kepler(
    mean_anomaly_rad: f64,
    e: f64,
    tolerance: f64,
    max_iterations: u32,
) -> Result<f64, EngineError> {
    let mut ecc = mean_anomaly_rad + e * mean_anomaly_rad.sin();
    for _ in 0..max_iterations {
        let delta = (mean_anomaly_rad - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < tolerance {
            return Ok(ecc);
        }
    }
    Err(EngineError::NoConvergence("Kepler equation"))
}

/// Heliocentric position `[x, y, z]` (au) on the J2000 ecliptic.
///
/// `t` is Julian centuries since J2000.0.
pub fn heliocentric_j2000(
    el: &KeplerElements,
    t: f64,
    tolerance: f64,
    max_iterations: u32,
) -> Result<[f64; 3], EngineError> {
    let a = at(el.a, t);
    let e = at(el.e, t);
    let incl = at(el.i, t).to_radians();
    let l = at(el.l, t);
    let peri = at(el.peri, t);
    let node = at(el.node, t);

    let arg_peri = (peri - node).to_radians();
    // Mean anomaly reduced to (−π, π] keeps Newton well-conditioned.
    let m = ((l - peri).to_radians() + std::f64::consts::PI).rem_euclid(TAU) - std::f64::consts::PI;
    let ecc = solve_kepler(m, e, tolerance, max_iterations)?;

    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.to_radians().sin_cos();
    let (si, ci) = incl.sin_cos();

    Ok([
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ])
}
