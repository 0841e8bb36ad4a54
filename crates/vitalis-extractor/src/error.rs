//! Error types for the Extractor

use thiserror::Error;

/// Input-shape and configuration errors raised before extraction starts
///
/// Content that merely fails to match a field is not an error; it produces an
/// answer set with that field absent.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Structured record was not a JSON object
    #[error("Structured input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Rejected configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}
