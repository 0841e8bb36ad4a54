//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Thresholds for the completeness and confidence gates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject when missing/required exceeds this ratio
    pub max_missing_ratio: f64,

    /// Minimum extraction-stage confidence
    pub min_confidence: f64,

    /// Minimum engine-reported OCR confidence (image input only)
    pub min_ocr_confidence: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_missing_ratio: 0.5,
            min_confidence: 0.3,
            min_ocr_confidence: 0.3,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("max_missing_ratio", self.max_missing_ratio),
            ("min_confidence", self.min_confidence),
            ("min_ocr_confidence", self.min_ocr_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0.0, 1.0], got {}", name, value));
            }
        }
        Ok(())
    }
}
