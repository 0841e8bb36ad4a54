//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for field extraction and confidence estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Starting point of the extraction confidence estimate
    pub base_confidence: f64,

    /// Added per field present in the answer set
    pub field_bonus: f64,

    /// Subtracted per missing required field
    ///
    /// At the default, OCR'd text with two required fields missing falls
    /// below the guardrail's confidence floor; typed text does not.
    pub missing_penalty: f64,

    /// Added when the input was typed rather than recovered by OCR
    pub text_input_bonus: f64,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.base_confidence) {
            return Err(ExtractorError::Config(
                "base_confidence must be within [0.0, 1.0]".to_string(),
            ));
        }
        for (name, value) in [
            ("field_bonus", self.field_bonus),
            ("missing_penalty", self.missing_penalty),
            ("text_input_bonus", self.text_input_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ExtractorError::Config(format!(
                    "{} must be a non-negative number",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            base_confidence: 0.5,
            field_bonus: 0.05,
            missing_penalty: 0.2,
            text_input_bonus: 0.1,
        }
    }
}
