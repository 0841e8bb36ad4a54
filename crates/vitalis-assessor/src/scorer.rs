//! Weighted risk scoring

use serde::Serialize;
use tracing::debug;
use vitalis_domain::{AnswerSet, FactorTag, Field, RiskLevel};

/// Weight applied to a label outside the factor vocabulary
pub const UNRECOGNIZED_FACTOR_WEIGHT: u32 = 5;

/// Number of tags surfaced as rationale
pub const RATIONALE_LEN: usize = 3;

const MAX_SCORE: i64 = 100;

/// Score, level, and the tags that explain them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Clamped score in [0, 100]
    pub score: u8,

    /// Level band for the score
    pub level: RiskLevel,

    /// First tags in detection order
    pub rationale: Vec<FactorTag>,
}

/// Score of free-form factor labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelScore {
    /// Clamped score in [0, 100]
    pub score: u8,

    /// Level band for the score
    pub level: RiskLevel,

    /// Labels that fell back to the default weight
    pub unrecognized: Vec<String>,
}

/// Fixed weight of a factor tag
pub fn weight(tag: FactorTag) -> u32 {
    match tag {
        FactorTag::Smoking => 25,
        FactorTag::Obesity => 20,
        FactorTag::PoorDiet => 15,
        FactorTag::LowExercise => 15,
        FactorTag::AdvancedAge => 15,
        FactorTag::HighFatIntake => 12,
        FactorTag::Underweight => 12,
        FactorTag::Overweight => 10,
        FactorTag::PoorSleep => 10,
        FactorTag::AlcoholConsumption => 8,
    }
}

/// Weight of a label, falling back to [`UNRECOGNIZED_FACTOR_WEIGHT`]
pub fn weight_for_label(label: &str) -> u32 {
    FactorTag::parse(label).map_or(UNRECOGNIZED_FACTOR_WEIGHT, weight)
}

/// Age escalator: +2 points for every full 5 years past 50
///
/// Applies on top of the `advanced age` tag weight; both can count.
pub fn age_adjustment(age: Option<i64>) -> i64 {
    match age {
        Some(age) if age > 50 => ((age - 50) / 5).saturating_mul(2),
        _ => 0,
    }
}

/// Score detected factors for an answer set
pub fn score_risk(factors: &[FactorTag], answers: &AnswerSet) -> RiskAssessment {
    let age = answers.integer(Field::Age);
    let score = total_score(factors.iter().map(|tag| weight(*tag)), age);
    let level = RiskLevel::from_score(score);

    debug!("Risk score {} ({}) from {} factor(s)", score, level, factors.len());
    RiskAssessment {
        score,
        level,
        rationale: factors.iter().take(RATIONALE_LEN).copied().collect(),
    }
}

/// Score arbitrary factor labels, e.g. from a command line
pub fn score_labels<S: AsRef<str>>(labels: &[S], age: Option<i64>) -> LabelScore {
    let unrecognized = labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| FactorTag::parse(label).is_none())
        .map(str::to_string)
        .collect();
    let score = total_score(labels.iter().map(|label| weight_for_label(label.as_ref())), age);

    LabelScore {
        score,
        level: RiskLevel::from_score(score),
        unrecognized,
    }
}

fn total_score(weights: impl Iterator<Item = u32>, age: Option<i64>) -> u8 {
    let raw = weights
        .map(i64::from)
        .fold(age_adjustment(age), i64::saturating_add);
    raw.clamp(0, MAX_SCORE) as u8
}
