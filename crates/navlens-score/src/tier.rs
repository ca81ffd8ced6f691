//! Score tiers.
//!
//! Tier boundaries are an ordered data table scanned once, shared by every
//! category. The `InsufficientData` tier is reserved for the scoring
//! engine's early exits and is never produced by the table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete quality tier for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 75-100.
    Excellent,
    /// 60-75.
    Good,
    /// 40-60.
    Average,
    /// 25-40.
    BelowAverage,
    /// 0-25.
    Poor,
    /// Early-exit tier: the fund's history cannot support a score.
    InsufficientData,
}

/// Inclusive-min, exclusive-max score bands (the top band includes 100).
const TIER_TABLE: &[(f64, f64, Tier)] = &[
    (75.0, 100.0, Tier::Excellent),
    (60.0, 75.0, Tier::Good),
    (40.0, 60.0, Tier::Average),
    (25.0, 40.0, Tier::BelowAverage),
    (0.0, 25.0, Tier::Poor),
];

impl Tier {
    /// Map a final 0-100 score to its tier.
    ///
    /// Scores outside the table (negative, or above 100 before rounding)
    /// clamp into the nearest band.
    pub fn for_score(score: f64) -> Self {
        for (min, _, tier) in TIER_TABLE {
            if score >= *min {
                return *tier;
            }
        }
        Self::Poor
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
            Self::InsufficientData => "Not Enough Data",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::for_score(100.0), Tier::Excellent);
        assert_eq!(Tier::for_score(75.0), Tier::Excellent);
        assert_eq!(Tier::for_score(74.99), Tier::Good);
        assert_eq!(Tier::for_score(60.0), Tier::Good);
        assert_eq!(Tier::for_score(59.99), Tier::Average);
        assert_eq!(Tier::for_score(40.0), Tier::Average);
        assert_eq!(Tier::for_score(39.99), Tier::BelowAverage);
        assert_eq!(Tier::for_score(25.0), Tier::BelowAverage);
        assert_eq!(Tier::for_score(24.99), Tier::Poor);
        assert_eq!(Tier::for_score(0.0), Tier::Poor);
    }

    #[test]
    fn test_out_of_band_scores_clamp() {
        assert_eq!(Tier::for_score(-5.0), Tier::Poor);
        assert_eq!(Tier::for_score(105.0), Tier::Excellent);
    }

    #[test]
    fn test_table_is_contiguous_and_descending() {
        for pair in TIER_TABLE.windows(2) {
            assert_eq!(pair[0].0, pair[1].1);
        }
        assert_eq!(TIER_TABLE.first().unwrap().1, 100.0);
        assert_eq!(TIER_TABLE.last().unwrap().0, 0.0);
    }

    #[test]
    fn test_insufficient_never_from_table() {
        for score in [-10.0, 0.0, 20.0, 50.0, 80.0, 120.0] {
            assert_ne!(Tier::for_score(score), Tier::InsufficientData);
        }
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&Tier::BelowAverage).unwrap(),
            "\"below_average\""
        );
        assert_eq!(
            serde_json::to_string(&Tier::InsufficientData).unwrap(),
            "\"insufficient_data\""
        );
    }
}
