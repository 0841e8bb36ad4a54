//! Vitalis Pipeline
//!
//! Wires the stages into one request/response flow:
//!
//! 1. Field extraction (text, structured record, or OCR'd image)
//! 2. Confidence estimation
//! 3. Guardrails (the only early exit)
//! 4. Factor extraction
//! 5. Risk scoring
//! 6. Recommendations
//!
//! # Examples
//!
//! ```
//! use vitalis_pipeline::{Analyzer, HttpOcrEngine, SurveyRequest};
//! use vitalis_llm::ChatCompletionsProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let analyzer = Analyzer::<HttpOcrEngine, ChatCompletionsProvider>::static_only();
//! let outcome = analyzer
//!     .analyze(SurveyRequest::text("Age: 42\nSmoker: yes\nExercise: rarely\nDiet: high sugar"))
//!     .await
//!     .unwrap();
//!
//! let response = outcome.into_response();
//! assert_eq!(response.status(), "ok");
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod input;
mod ocr;
mod pipeline;
mod response;

pub use error::{OcrError, PipelineError};
pub use input::{SurveyInput, SurveyRequest};
pub use ocr::{HttpOcrEngine, DEFAULT_OCR_TIMEOUT_SECS};
pub use pipeline::{AnalysisOutcome, AnalysisReport, Analyzer};
pub use response::{AnalysisBody, AnalysisResponse};
