//! Result types for extraction

use serde::Serialize;
use vitalis_domain::{AnswerSet, Field};

/// Output of the field extractor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// Fields found in the input
    pub answers: AnswerSet,

    /// Required fields absent or empty, in canonical order
    pub missing_fields: Vec<Field>,
}

impl Extraction {
    /// Wrap an answer set, computing its missing fields
    pub fn from_answers(answers: AnswerSet) -> Self {
        let missing_fields = answers.missing_required();
        Self {
            answers,
            missing_fields,
        }
    }
}

/// Extraction-stage confidence
///
/// `confidence` measures extraction completeness and input reliability.
/// `ocr_confidence` is the recognition engine's own figure, reported only for
/// image input and kept separate so the guardrail can judge both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceReport {
    /// Completeness/reliability estimate in [0.0, 1.0]
    pub confidence: f64,

    /// Engine-reported OCR confidence, image input only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_confidence: Option<f64>,
}
