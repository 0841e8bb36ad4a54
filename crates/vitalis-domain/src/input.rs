//! Input provenance

use serde::{Deserialize, Serialize};

/// Where the text handed to the field extractor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Verbatim user text or a structured record
    Text,
    /// Text recovered from an image by the OCR engine
    Image,
}

impl InputKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Image => "image",
        }
    }
}
