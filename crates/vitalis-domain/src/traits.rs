//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the deterministic pipeline and
//! the services it consumes. Implementations live in other crates.

use crate::{FactorTag, RiskLevel};
use std::future::Future;

/// Text recovered from an image together with the engine's own confidence
#[derive(Debug, Clone, PartialEq)]
pub struct OcrOutput {
    /// Recognized text
    pub text: String,

    /// Engine-reported recognition confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Trait for optical character recognition
///
/// Implemented by the infrastructure layer (vitalis-pipeline)
pub trait OcrEngine {
    /// Error type for recognition failures
    type Error;

    /// Recognize text in an image
    fn recognize(
        &self,
        image: &[u8],
    ) -> impl Future<Output = Result<OcrOutput, Self::Error>> + Send;
}

/// Trait for the generative recommendation service
///
/// Implemented by the infrastructure layer (vitalis-llm)
pub trait RecommendationProvider {
    /// Error type for provider operations
    type Error;

    /// Produce short actionable recommendations for a risk profile
    fn recommend(
        &self,
        level: RiskLevel,
        factors: &[FactorTag],
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;
}
