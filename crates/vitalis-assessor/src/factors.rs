//! Factor extraction rules

use serde::Serialize;
use tracing::debug;
use vitalis_domain::{round_confidence, AnswerSet, FactorTag, Field};

/// Factor-stage confidence before any sparsity penalty
pub const BASE_FACTOR_CONFIDENCE: f64 = 0.9;

/// Subtracted when the answer set has fewer than [`SPARSE_KEY_THRESHOLD`] keys
pub const SPARSE_PENALTY: f64 = 0.2;

/// Key count below which inference is considered sparse
pub const SPARSE_KEY_THRESHOLD: usize = 3;

const POOR_DIET_TERMS: [&str; 3] = ["high sugar", "fast food", "processed"];
const HIGH_FAT_TERMS: [&str; 2] = ["high fat", "fried"];

/// Detected risk factors and the reliability of the inference
///
/// `confidence` is independent of the extraction-stage confidence: it only
/// reflects how much data the rules had to work with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorAnalysis {
    /// Tags in detection order, each at most once
    pub factors: Vec<FactorTag>,

    /// Factor-stage confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Apply every factor rule to a validated answer set
///
/// Rules run in a fixed order (age, smoking, exercise, diet, BMI, sleep,
/// alcohol). At most one BMI band fires.
pub fn extract_factors(answers: &AnswerSet) -> FactorAnalysis {
    let mut factors = Vec::new();

    if answers.integer(Field::Age).is_some_and(|age| age >= 65) {
        factors.push(FactorTag::AdvancedAge);
    }

    if answers.boolean(Field::Smoker) == Some(true) {
        factors.push(FactorTag::Smoking);
    }

    if let Some(exercise) = lowered(answers, Field::Exercise) {
        if matches!(exercise.as_str(), "never" | "rarely") {
            factors.push(FactorTag::LowExercise);
        }
    }

    if let Some(diet) = lowered(answers, Field::Diet) {
        if POOR_DIET_TERMS.iter().any(|term| diet.contains(term)) {
            factors.push(FactorTag::PoorDiet);
        }
        if HIGH_FAT_TERMS.iter().any(|term| diet.contains(term)) {
            factors.push(FactorTag::HighFatIntake);
        }
    }

    if let Some(bmi) = answers.number(Field::Bmi) {
        if bmi >= 30.0 {
            factors.push(FactorTag::Obesity);
        } else if bmi >= 25.0 {
            factors.push(FactorTag::Overweight);
        } else if bmi < 18.5 {
            factors.push(FactorTag::Underweight);
        }
    }

    if answers
        .number(Field::Sleep)
        .is_some_and(|sleep| !(6.0..=9.0).contains(&sleep))
    {
        factors.push(FactorTag::PoorSleep);
    }

    if let Some(alcohol) = lowered(answers, Field::Alcohol) {
        if matches!(alcohol.as_str(), "often" | "sometimes") {
            factors.push(FactorTag::AlcoholConsumption);
        }
    }

    let mut confidence = BASE_FACTOR_CONFIDENCE;
    if answers.len() < SPARSE_KEY_THRESHOLD {
        confidence -= SPARSE_PENALTY;
    }

    debug!("Detected {} risk factor(s)", factors.len());
    FactorAnalysis {
        factors,
        confidence: round_confidence(confidence),
    }
}

fn lowered(answers: &AnswerSet, field: Field) -> Option<String> {
    answers.text(field).map(|s| s.trim().to_lowercase())
}
