//! Shared helpers for zodiac arithmetic.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs can round up to exactly 360.0; that case is folded
/// back to 0.0 so every index derived from the result stays in range.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Inclusive count from `from` to `to` around a cycle of `n` positions.
///
/// Counting starts at 1 on `from` itself, the way houses and stars are
/// counted: `count_from(0, 6, 12) == 7` (the 7th sign from Aries is Libra).
pub fn count_from(from: u8, to: u8, n: u8) -> u8 {
    ((i16::from(to) - i16::from(from)).rem_euclid(i16::from(n)) + 1) as u8
}

/// Zero-based forward distance from `from` to `to` around a cycle of `n`.
pub fn forward_distance(from: u8, to: u8, n: u8) -> u8 {
    (i16::from(to) - i16::from(from)).rem_euclid(i16::from(n)) as u8
}
