//! Vitalis Gatekeeper
//!
//! Guardrail validation applied before any scoring occurs.
//!
//! The Gatekeeper runs three gates in order, each a hard stop:
//! - Completeness (too many required fields missing → `incomplete_profile`)
//! - Confidence (extraction or OCR confidence too low → `low_confidence`)
//! - Schema (first field-level violation → `invalid_data`)
//!
//! Rejections are ordinary values carrying a stable wire shape, not errors.
//!
//! # Examples
//!
//! ```
//! use vitalis_gatekeeper::{Gatekeeper, ValidationConfig};
//! use vitalis_domain::{AnswerSet, Field};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let answers = AnswerSet::new()
//!     .with(Field::Age, 150)
//!     .with(Field::Smoker, false)
//!     .with(Field::Exercise, "daily")
//!     .with(Field::Diet, "balanced");
//!
//! let result = gatekeeper.validate(&answers, &answers.missing_required(), 0.8, None);
//! assert_eq!(result.rejection().map(|r| r.status()), Some("invalid_data"));
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::ValidationConfig;
pub use validator::{Gatekeeper, Rejection, ValidationResult, ALCOHOL_VALUES, EXERCISE_LEVELS};
