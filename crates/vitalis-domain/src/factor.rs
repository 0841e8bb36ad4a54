//! Factor tag module - the closed risk indicator vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named boolean risk indicator derived from an answer set
///
/// The vocabulary is closed; every rule table keyed by it is an exhaustive
/// `match`, so adding a tag is a compile error until every table handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorTag {
    /// Currently smokes
    #[serde(rename = "smoking")]
    Smoking,
    /// Diet mentions high sugar, fast food, or processed food
    #[serde(rename = "poor diet")]
    PoorDiet,
    /// Diet mentions high fat or fried food
    #[serde(rename = "high fat intake")]
    HighFatIntake,
    /// Exercises never or rarely
    #[serde(rename = "low exercise")]
    LowExercise,
    /// BMI of 30 or more
    #[serde(rename = "obesity")]
    Obesity,
    /// BMI from 25 up to 30
    #[serde(rename = "overweight")]
    Overweight,
    /// BMI below 18.5
    #[serde(rename = "underweight")]
    Underweight,
    /// Age 65 or older
    #[serde(rename = "advanced age")]
    AdvancedAge,
    /// Less than 6 or more than 9 hours of sleep
    #[serde(rename = "poor sleep")]
    PoorSleep,
    /// Drinks sometimes or often
    #[serde(rename = "alcohol consumption")]
    AlcoholConsumption,
}

impl FactorTag {
    /// Every tag in the vocabulary
    pub const ALL: [FactorTag; 10] = [
        FactorTag::Smoking,
        FactorTag::PoorDiet,
        FactorTag::HighFatIntake,
        FactorTag::LowExercise,
        FactorTag::Obesity,
        FactorTag::Overweight,
        FactorTag::Underweight,
        FactorTag::AdvancedAge,
        FactorTag::PoorSleep,
        FactorTag::AlcoholConsumption,
    ];

    /// Get the tag label as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorTag::Smoking => "smoking",
            FactorTag::PoorDiet => "poor diet",
            FactorTag::HighFatIntake => "high fat intake",
            FactorTag::LowExercise => "low exercise",
            FactorTag::Obesity => "obesity",
            FactorTag::Overweight => "overweight",
            FactorTag::Underweight => "underweight",
            FactorTag::AdvancedAge => "advanced age",
            FactorTag::PoorSleep => "poor sleep",
            FactorTag::AlcoholConsumption => "alcohol consumption",
        }
    }

    /// Parse a tag from its label
    ///
    /// Case-insensitive; underscores and hyphens are read as spaces so that
    /// `high_fat_intake` and `poor-sleep` resolve too.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == normalized)
    }
}

impl fmt::Display for FactorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FactorTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown factor tag: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for tag in FactorTag::ALL {
            assert_eq!(FactorTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_parse_tolerates_separators() {
        assert_eq!(FactorTag::parse("High_Fat_Intake"), Some(FactorTag::HighFatIntake));
        assert_eq!(FactorTag::parse("poor-sleep"), Some(FactorTag::PoorSleep));
        assert_eq!(FactorTag::parse("stress"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&FactorTag::AlcoholConsumption).unwrap();
        assert_eq!(json, "\"alcohol consumption\"");
        let tag: FactorTag = serde_json::from_str("\"advanced age\"").unwrap();
        assert_eq!(tag, FactorTag::AdvancedAge);
    }
}
