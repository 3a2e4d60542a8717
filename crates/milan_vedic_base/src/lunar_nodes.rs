//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node polynomial from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 47. Ketu is always Rahu + 180°.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node).
    Ketu,
}

/// Both nodes, Rahu first.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

/// Mean Rahu (ascending node) tropical longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_360(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0)
}

/// Mean Ketu (descending node) tropical longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

/// Tropical longitude of either node.
pub fn lunar_node_deg(node: LunarNode, t: f64) -> f64 {
    match node {
        LunarNode::Rahu => mean_rahu_deg(t),
        LunarNode::Ketu => mean_ketu_deg(t),
    }
}
