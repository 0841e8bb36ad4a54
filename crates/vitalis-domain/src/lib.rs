//! Vitalis Domain Layer
//!
//! This crate contains the value types and trait seams shared by every stage
//! of the lifestyle survey analysis pipeline. It carries no I/O and depends
//! only on `serde` for the wire representation of its types.
//!
//! ## Key Concepts
//!
//! - **AnswerSet**: Normalized field → value record extracted from raw input
//! - **Missing fields**: Required fields absent or empty in an answer set
//! - **Factor tag**: A named boolean risk indicator derived from the answers
//! - **Risk level**: Step function of the numeric risk score
//! - **Recommendation source**: Whether advice was generated or rule-based
//!
//! ## Architecture
//!
//! Stages never mutate a previous stage's output. Each one consumes a value
//! from this crate and produces a new one:
//!
//! ```text
//! text → AnswerSet → (accept | Rejection) → [FactorTag] → score/level → recommendations
//! ```
//!
//! External collaborators (OCR engine, generative recommendation service) are
//! reached only through the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod confidence;
pub mod factor;
pub mod input;
pub mod recommendation;
pub mod risk;
pub mod traits;

// Re-exports for convenience
pub use answer::{AnswerSet, Field};
pub use confidence::round_confidence;
pub use factor::FactorTag;
pub use input::InputKind;
pub use recommendation::{strip_list_marker, RecommendationSource};
pub use risk::RiskLevel;
