//! Badge tiers and threshold classification.
//!
//! A badge is derived solely from an employee's points score via fixed
//! thresholds; boundary values always belong to the higher tier. Two point
//! scales exist in the wild — a 0–20 scale with a `None` tier for zero
//! points, and a 0–200 scale where everyone earns at least Bronze — so the
//! thresholds are parameterized with a preset for each.
//!
//! ```
//! use nudgeboard_logic::badge::{classify, Badge, BadgeThresholds};
//!
//! let scale = BadgeThresholds::default();
//! assert_eq!(classify(15, &scale), Badge::Gold);
//! assert_eq!(classify(14, &scale), Badge::Silver);
//! assert_eq!(classify(0, &scale), Badge::None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Points at or above the gold threshold.
    Gold,
    /// Points at or above the silver threshold, below gold.
    Silver,
    /// Points below silver (and above zero on the narrow scale).
    Bronze,
    /// Zero points on the narrow scale; unreachable on the wide scale.
    None,
}

impl Badge {
    /// Selectable badge tiers for filter controls (excludes [`Badge::None`],
    /// which the dashboard renders as a blank cell, not a filter option).
    pub const SELECTABLE: [Badge; 3] = [Badge::Gold, Badge::Silver, Badge::Bronze];

    /// Numeric rank for monotonicity checks; higher tier = higher rank.
    pub fn rank(self) -> u8 {
        match self {
            Badge::None => 0,
            Badge::Bronze => 1,
            Badge::Silver => 2,
            Badge::Gold => 3,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Badge::None renders as an empty cell on the dashboard.
        let label = match self {
            Badge::Gold => "Gold",
            Badge::Silver => "Silver",
            Badge::Bronze => "Bronze",
            Badge::None => "",
        };
        f.write_str(label)
    }
}

/// Classification thresholds for one point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeThresholds {
    /// Minimum points for Gold.
    pub gold_min: u32,
    /// Minimum points for Silver.
    pub silver_min: u32,
    /// On the narrow scale, zero points means no badge at all; on the wide
    /// scale everyone below Silver gets Bronze.
    pub zero_means_none: bool,
}

impl BadgeThresholds {
    /// Wide 0–200 scale: `>= 150` Gold, `>= 80` Silver, otherwise Bronze.
    pub fn wide() -> Self {
        Self {
            gold_min: 150,
            silver_min: 80,
            zero_means_none: false,
        }
    }
}

impl Default for BadgeThresholds {
    /// Narrow 0–20 scale: `>= 15` Gold, `>= 8` Silver, `1..8` Bronze,
    /// `0` no badge.
    fn default() -> Self {
        Self {
            gold_min: 15,
            silver_min: 8,
            zero_means_none: true,
        }
    }
}

/// Classify a points score into a badge tier.
///
/// Deterministic and monotonic: more points never yields a lower tier.
/// Negative scores are unrepresentable by construction.
pub fn classify(points: u32, thresholds: &BadgeThresholds) -> Badge {
    if points >= thresholds.gold_min {
        Badge::Gold
    } else if points >= thresholds.silver_min {
        Badge::Silver
    } else if points > 0 || !thresholds.zero_means_none {
        Badge::Bronze
    } else {
        Badge::None
    }
}
