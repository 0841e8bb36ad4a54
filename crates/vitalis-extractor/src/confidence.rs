//! Extraction-stage confidence estimation

use crate::config::ExtractorConfig;
use crate::types::{ConfidenceReport, Extraction};
use vitalis_domain::{round_confidence, InputKind};

/// Estimate how far an extraction can be trusted
///
/// `base + field_bonus * present - missing_penalty * missing (+ text bonus)`,
/// clamped to [0, 1] and rounded to two places. The OCR engine's confidence is
/// passed through separately for image input and ignored for text input.
pub fn estimate_confidence(
    config: &ExtractorConfig,
    extraction: &Extraction,
    kind: InputKind,
    ocr_confidence: Option<f64>,
) -> ConfidenceReport {
    let present = extraction.answers.len() as f64;
    let missing = extraction.missing_fields.len() as f64;

    let mut confidence = config.base_confidence + config.field_bonus * present
        - config.missing_penalty * missing;
    if kind == InputKind::Text {
        confidence += config.text_input_bonus;
    }

    let ocr_confidence = match kind {
        InputKind::Image => ocr_confidence.map(round_confidence),
        InputKind::Text => None,
    };

    ConfidenceReport {
        confidence: round_confidence(confidence),
        ocr_confidence,
    }
}
