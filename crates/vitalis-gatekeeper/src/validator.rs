//! Guardrail validation logic

use crate::ValidationConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use vitalis_domain::{AnswerSet, Field};

/// Accepted exercise frequencies
pub const EXERCISE_LEVELS: [&str; 5] = ["never", "rarely", "sometimes", "often", "daily"];

/// Accepted alcohol answers when given as a string
pub const ALCOHOL_VALUES: [&str; 5] = ["never", "rarely", "sometimes", "often", "no"];

/// Outcome of the guardrail gates
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// All three gates passed
    Accepted,

    /// A gate stopped the pipeline
    Rejected(Rejection),
}

impl ValidationResult {
    /// Whether every gate passed
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The rejection, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Terminal guardrail rejection
///
/// Serializes to the machine-readable contract external callers rely on:
/// a `status` literal, a human-readable `reason`, and per-kind context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rejection {
    /// Too many required fields are missing
    IncompleteProfile {
        /// Human-readable explanation
        reason: String,
        /// Required fields that were absent
        missing_fields: Vec<Field>,
        /// Extraction-stage confidence at the time of rejection
        confidence: f64,
    },

    /// Extraction or OCR confidence below threshold
    LowConfidence {
        /// Human-readable explanation
        reason: String,
        /// Extraction-stage confidence
        confidence: f64,
        /// Engine-reported OCR confidence, image input only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ocr_confidence: Option<f64>,
    },

    /// A field violates its schema constraint
    InvalidData {
        /// Human-readable explanation
        reason: String,
        /// Offending field
        field: Field,
    },
}

impl Rejection {
    /// Wire status literal
    pub fn status(&self) -> &'static str {
        match self {
            Rejection::IncompleteProfile { .. } => "incomplete_profile",
            Rejection::LowConfidence { .. } => "low_confidence",
            Rejection::InvalidData { .. } => "invalid_data",
        }
    }

    /// Human-readable explanation
    pub fn reason(&self) -> &str {
        match self {
            Rejection::IncompleteProfile { reason, .. }
            | Rejection::LowConfidence { reason, .. }
            | Rejection::InvalidData { reason, .. } => reason,
        }
    }
}

/// The Gatekeeper decides whether an answer set may be scored
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Run the completeness, confidence, and schema gates in order
    ///
    /// # Arguments
    ///
    /// * `answers` - The extracted answer set
    /// * `missing` - Required fields the extractor reported missing
    /// * `confidence` - Extraction-stage confidence
    /// * `ocr_confidence` - Engine-reported OCR confidence (image input only)
    ///
    /// # Returns
    ///
    /// `Accepted`, or the first gate's rejection. Later gates never run after
    /// a rejection, and the schema gate stops at the first violation.
    pub fn validate(
        &self,
        answers: &AnswerSet,
        missing: &[Field],
        confidence: f64,
        ocr_confidence: Option<f64>,
    ) -> ValidationResult {
        let result = self
            .check_completeness(missing, confidence)
            .or_else(|| self.check_confidence(confidence, ocr_confidence))
            .or_else(|| check_schema(answers));

        match result {
            None => {
                debug!("Answer set passed all guardrails");
                ValidationResult::Accepted
            }
            Some(rejection) => {
                info!("Guardrail rejected request: {} ({})", rejection.status(), rejection.reason());
                ValidationResult::Rejected(rejection)
            }
        }
    }

    fn check_completeness(&self, missing: &[Field], confidence: f64) -> Option<Rejection> {
        let ratio = missing.len() as f64 / Field::REQUIRED.len() as f64;
        if ratio <= self.config.max_missing_ratio {
            return None;
        }

        let names: Vec<&str> = missing.iter().map(Field::as_str).collect();
        Some(Rejection::IncompleteProfile {
            reason: format!(
                "Too many required fields are missing: {}",
                names.join(", ")
            ),
            missing_fields: missing.to_vec(),
            confidence,
        })
    }

    fn check_confidence(&self, confidence: f64, ocr_confidence: Option<f64>) -> Option<Rejection> {
        let reason = if confidence < self.config.min_confidence {
            format!(
                "Extraction confidence {:.2} is below the minimum of {:.2}",
                confidence, self.config.min_confidence
            )
        } else {
            match ocr_confidence {
                Some(ocr) if ocr < self.config.min_ocr_confidence => format!(
                    "OCR confidence {:.2} is below the minimum of {:.2}",
                    ocr, self.config.min_ocr_confidence
                ),
                _ => return None,
            }
        };

        Some(Rejection::LowConfidence {
            reason,
            confidence,
            ocr_confidence,
        })
    }
}

/// Field-level schema check, fail-fast over required then optional fields
fn check_schema(answers: &AnswerSet) -> Option<Rejection> {
    Field::REQUIRED
        .iter()
        .chain(Field::OPTIONAL.iter())
        .find_map(|field| check_field(answers, *field).map(|reason| Rejection::InvalidData {
            reason,
            field: *field,
        }))
}

fn check_field(answers: &AnswerSet, field: Field) -> Option<String> {
    if !answers.is_present(field) {
        return field
            .is_required()
            .then(|| format!("{} is required", field));
    }

    match field {
        Field::Age => match answers.integer(field) {
            Some(age) if (1..=120).contains(&age) => None,
            Some(age) => Some(format!("age must be between 1 and 120, got {}", age)),
            None => Some("age must be an integer".to_string()),
        },
        Field::Smoker => answers
            .boolean(field)
            .is_none()
            .then(|| "smoker must be a boolean (true or false)".to_string()),
        Field::Exercise => match answers.text(field) {
            Some(level) if EXERCISE_LEVELS.contains(&level) => None,
            _ => Some(format!(
                "exercise must be one of: {}",
                EXERCISE_LEVELS.join(", ")
            )),
        },
        Field::Diet => answers
            .text(field)
            .is_none()
            .then(|| "diet must be a non-empty string".to_string()),
        Field::Bmi => check_range(answers, field, 10.0, 50.0),
        Field::Sleep => check_range(answers, field, 0.0, 24.0),
        Field::Alcohol => match answers.get(field) {
            Some(Value::Bool(_)) => None,
            Some(Value::String(s)) if ALCOHOL_VALUES.contains(&s.as_str()) => None,
            _ => Some(format!(
                "alcohol must be a boolean or one of: {}",
                ALCOHOL_VALUES.join(", ")
            )),
        },
    }
}

fn check_range(answers: &AnswerSet, field: Field, min: f64, max: f64) -> Option<String> {
    match answers.number(field) {
        Some(value) if (min..=max).contains(&value) => None,
        _ => Some(format!("{} must be a number between {} and {}", field, min, max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_answers() -> AnswerSet {
        AnswerSet::new()
            .with(Field::Age, 35)
            .with(Field::Smoker, false)
            .with(Field::Exercise, "daily")
            .with(Field::Diet, "balanced")
            .with(Field::Bmi, 24.2)
            .with(Field::Sleep, 7.5)
            .with(Field::Alcohol, "rarely")
    }

    fn validate(answers: &AnswerSet, confidence: f64) -> ValidationResult {
        Gatekeeper::default().validate(answers, &answers.missing_required(), confidence, None)
    }

    fn invalid_field(result: &ValidationResult) -> Field {
        match result.rejection() {
            Some(Rejection::InvalidData { field, .. }) => *field,
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_answers_accepted() {
        assert!(validate(&valid_answers(), 0.9).is_accepted());
    }

    #[test]
    fn test_three_missing_is_incomplete_regardless_of_confidence() {
        let answers = AnswerSet::new().with(Field::Age, 40);
        let result = validate(&answers, 1.0);
        match result.rejection() {
            Some(Rejection::IncompleteProfile { missing_fields, confidence, .. }) => {
                assert_eq!(missing_fields, &vec![Field::Smoker, Field::Exercise, Field::Diet]);
                assert_eq!(*confidence, 1.0);
            }
            other => panic!("Expected IncompleteProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_two_missing_passes_completeness_but_fails_schema() {
        let answers = AnswerSet::new()
            .with(Field::Age, 40)
            .with(Field::Smoker, true);
        let result = validate(&answers, 0.9);
        assert_eq!(invalid_field(&result), Field::Exercise);
        assert_eq!(result.rejection().unwrap().reason(), "exercise is required");
    }

    #[test]
    fn test_low_confidence() {
        let result = validate(&valid_answers(), 0.29);
        match result.rejection() {
            Some(Rejection::LowConfidence { confidence, ocr_confidence, .. }) => {
                assert_eq!(*confidence, 0.29);
                assert_eq!(*ocr_confidence, None);
            }
            other => panic!("Expected LowConfidence, got {:?}", other),
        }
    }

    #[test]
    fn test_confidence_at_threshold_passes() {
        assert!(validate(&valid_answers(), 0.3).is_accepted());
    }

    #[test]
    fn test_low_ocr_confidence_rejected_jointly() {
        let answers = valid_answers();
        let result = Gatekeeper::default().validate(&answers, &[], 0.8, Some(0.12));
        match result.rejection() {
            Some(Rejection::LowConfidence { reason, confidence, ocr_confidence }) => {
                assert!(reason.starts_with("OCR confidence"));
                assert_eq!(*confidence, 0.8);
                assert_eq!(*ocr_confidence, Some(0.12));
            }
            other => panic!("Expected LowConfidence, got {:?}", other),
        }
    }

    #[test]
    fn test_completeness_gate_runs_before_confidence_gate() {
        let answers = AnswerSet::new();
        let result = validate(&answers, 0.0);
        assert_eq!(result.rejection().unwrap().status(), "incomplete_profile");
    }

    #[test]
    fn test_age_out_of_range() {
        let answers = valid_answers().with(Field::Age, 150);
        let result = validate(&answers, 0.9);
        assert_eq!(invalid_field(&result), Field::Age);
        assert!(result.rejection().unwrap().reason().contains("between 1 and 120"));
    }

    #[test]
    fn test_age_must_be_integer() {
        let answers = valid_answers().with(Field::Age, "42");
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Age);

        let answers = valid_answers().with(Field::Age, 42.5);
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Age);

        let answers = valid_answers().with(Field::Age, 42.0);
        assert!(validate(&answers, 0.9).is_accepted());
    }

    #[test]
    fn test_only_first_violation_reported() {
        let answers = valid_answers()
            .with(Field::Smoker, "yes")
            .with(Field::Bmi, 70.0);
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Smoker);
    }

    #[test]
    fn test_exercise_vocabulary() {
        let answers = valid_answers().with(Field::Exercise, "weekly");
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Exercise);
    }

    #[test]
    fn test_optional_ranges() {
        let answers = valid_answers().with(Field::Bmi, 9.9);
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Bmi);

        let answers = valid_answers().with(Field::Sleep, 25);
        assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Sleep);

        let answers = valid_answers().with(Field::Sleep, 0);
        assert!(validate(&answers, 0.9).is_accepted());
    }

    #[test]
    fn test_optional_fields_may_be_absent_or_null() {
        let answers = AnswerSet::new()
            .with(Field::Age, 35)
            .with(Field::Smoker, false)
            .with(Field::Exercise, "often")
            .with(Field::Diet, "balanced")
            .with(Field::Bmi, Value::Null);
        assert!(validate(&answers, 0.9).is_accepted());
    }

    #[test]
    fn test_alcohol_values() {
        for ok in [json!(true), json!(false), json!("no"), json!("often")] {
            let answers = valid_answers().with(Field::Alcohol, ok.clone());
            assert!(validate(&answers, 0.9).is_accepted(), "value: {}", ok);
        }
        for bad in [json!("yes"), json!("daily"), json!(3)] {
            let answers = valid_answers().with(Field::Alcohol, bad.clone());
            assert_eq!(invalid_field(&validate(&answers, 0.9)), Field::Alcohol, "value: {}", bad);
        }
    }

    #[test]
    fn test_rejection_wire_shape() {
        let rejection = Rejection::InvalidData {
            reason: "age must be between 1 and 120, got 150".to_string(),
            field: Field::Age,
        };
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(
            json,
            json!({
                "status": "invalid_data",
                "reason": "age must be between 1 and 120, got 150",
                "field": "age"
            })
        );

        let rejection = Rejection::IncompleteProfile {
            reason: "missing".to_string(),
            missing_fields: vec![Field::Smoker, Field::Exercise, Field::Diet],
            confidence: 0.25,
        };
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["status"], "incomplete_profile");
        assert_eq!(json["missing_fields"], json!(["smoker", "exercise", "diet"]));
    }
}
