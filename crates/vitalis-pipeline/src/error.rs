//! Error types for the analysis pipeline

use thiserror::Error;
use vitalis_extractor::ExtractorError;

/// Failures that end a request without a result
///
/// Guardrail rejections are not errors; they come back as
/// [`AnalysisOutcome::Rejected`](crate::AnalysisOutcome::Rejected).
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Request did not carry exactly one usable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input could not be handed to the field extractor
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// OCR engine failed to recognize the image
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// Image supplied but no OCR engine is configured
    #[error("Image input requires an OCR engine, none is configured")]
    OcrUnavailable,
}

/// HTTP OCR engine errors
#[derive(Error, Debug)]
pub enum OcrError {
    /// Connection error (network, DNS, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Engine answered with a non-success status
    #[error("OCR service error: {0}")]
    Service(String),

    /// Engine answered with an unexpected body
    #[error("Invalid OCR response: {0}")]
    InvalidResponse(String),

    /// Engine client could not be set up
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for OcrError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            OcrError::Connection(e.to_string())
        } else if e.is_decode() {
            OcrError::InvalidResponse(e.to_string())
        } else {
            match e.status() {
                Some(status) => OcrError::Service(format!("HTTP {}", status)),
                None => OcrError::Connection(e.to_string()),
            }
        }
    }
}
