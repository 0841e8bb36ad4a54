//! Risk level module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score still classified as low risk
pub const LOW_MAX: u8 = 30;

/// Highest score still classified as medium risk
pub const MEDIUM_MAX: u8 = 60;

/// Risk category derived from a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score 0-30
    Low,
    /// Score 31-60
    Medium,
    /// Score 61-100
    High,
}

impl RiskLevel {
    /// Classify a score
    ///
    /// # Examples
    ///
    /// ```
    /// use vitalis_domain::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(61), RiskLevel::High);
    /// ```
    pub fn from_score(score: u8) -> Self {
        if score <= LOW_MAX {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(61), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    proptest! {
        #[test]
        fn prop_level_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
        }
    }
}
