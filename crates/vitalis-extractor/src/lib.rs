//! Vitalis Extractor
//!
//! Converts raw survey input into a partial answer set and estimates how far
//! that extraction can be trusted.
//!
//! # Architecture
//!
//! ```text
//! raw text ─┬─ starts with '{' ─ JSON object? ── yes ─→ AnswerSet (verbatim)
//!           │                        └── no ──┐
//!           └─────────────────────────────────┴─→ per-field pattern detectors → AnswerSet
//!
//! AnswerSet + missing fields + input kind (+ OCR confidence) → ConfidenceReport
//! ```
//!
//! Extraction never fails on content: a field that cannot be found is simply
//! absent. The only errors are input-shape errors (oversized text, a
//! structured record that is not an object).
//!
//! # Example Usage
//!
//! ```
//! use vitalis_extractor::{FieldExtractor, ExtractorConfig};
//! use vitalis_domain::{Field, InputKind};
//!
//! let extractor = FieldExtractor::new(ExtractorConfig::default());
//! let extraction = extractor
//!     .extract("Age: 42\nSmoker: yes\nExercise: rarely\nDiet: high sugar")
//!     .unwrap();
//!
//! assert!(extraction.missing_fields.is_empty());
//! assert_eq!(extraction.answers.integer(Field::Age), Some(42));
//!
//! let report = extractor.estimate_confidence(&extraction, InputKind::Text, None);
//! assert!(report.confidence > 0.5);
//! ```

#![warn(missing_docs)]

mod confidence;
mod config;
mod error;
mod extractor;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use confidence::estimate_confidence;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use parser::{extract_fields, parse_structured};
pub use types::{ConfidenceReport, Extraction};
