//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::confidence::estimate_confidence;
use crate::error::ExtractorError;
use crate::parser::{answers_from_object, extract_fields, parse_structured};
use crate::types::{ConfidenceReport, Extraction};
use serde_json::Value;
use tracing::{debug, info};
use vitalis_domain::InputKind;

/// The field extractor turns raw survey input into an answer set
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    config: ExtractorConfig,
}

impl FieldExtractor {
    /// Create a new FieldExtractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract fields from raw text
    ///
    /// Text that is a JSON object is taken verbatim; everything else goes
    /// through the per-field pattern detectors.
    pub fn extract(&self, text: &str) -> Result<Extraction, ExtractorError> {
        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        let answers = match parse_structured(text) {
            Some(answers) => {
                debug!("Structured fast path matched");
                answers
            }
            None => extract_fields(text),
        };

        let extraction = Extraction::from_answers(answers);
        info!(
            "Extracted {} field(s), {} required missing",
            extraction.answers.len(),
            extraction.missing_fields.len()
        );
        Ok(extraction)
    }

    /// Extract fields from an already structured record
    pub fn extract_structured(&self, record: &Value) -> Result<Extraction, ExtractorError> {
        let object = record
            .as_object()
            .ok_or_else(|| ExtractorError::NotAnObject(json_kind(record)))?;

        let extraction = Extraction::from_answers(answers_from_object(object));
        info!(
            "Structured record carried {} field(s), {} required missing",
            extraction.answers.len(),
            extraction.missing_fields.len()
        );
        Ok(extraction)
    }

    /// Estimate extraction-stage confidence with this extractor's settings
    pub fn estimate_confidence(
        &self,
        extraction: &Extraction,
        kind: InputKind,
        ocr_confidence: Option<f64>,
    ) -> ConfidenceReport {
        estimate_confidence(&self.config, extraction, kind, ocr_confidence)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
