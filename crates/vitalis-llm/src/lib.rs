//! Vitalis LLM Provider Layer
//!
//! Implementations of the `RecommendationProvider` trait from `vitalis-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `ChatCompletionsProvider`: OpenAI-compatible chat completions API
//!
//! Providers make a single attempt per call. Timeouts, fallback, and list
//! normalization are the caller's concern (see `vitalis-advisor`).
//!
//! # Examples
//!
//! ```
//! use vitalis_llm::MockProvider;
//! use vitalis_domain::traits::RecommendationProvider;
//! use vitalis_domain::{FactorTag, RiskLevel};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new(r#"["Walk 30 minutes a day", "Quit smoking"]"#);
//! let items = provider
//!     .recommend(RiskLevel::High, &[FactorTag::Smoking])
//!     .await
//!     .unwrap();
//! assert_eq!(items.len(), 2);
//! # }
//! ```

#![warn(missing_docs)]

pub mod chat;
mod parser;
mod prompt;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use vitalis_domain::traits::RecommendationProvider;
use vitalis_domain::{FactorTag, RiskLevel};

pub use chat::ChatCompletionsProvider;
pub use parser::parse_recommendation_list;
pub use prompt::RecommendationPrompt;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No API key configured
    #[error("Missing API credential")]
    MissingCredential,

    /// API key rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock recommendation provider for deterministic testing
///
/// Returns a pre-configured raw response (run through the same list parser as
/// real providers) or a pre-configured failure, optionally after a delay.
///
/// # Examples
///
/// ```
/// use vitalis_llm::MockProvider;
/// use std::time::Duration;
///
/// let ok = MockProvider::new("- Drink water\n- Sleep 8 hours");
/// let failing = MockProvider::failing("service unavailable");
/// let slow = MockProvider::new("[\"Stretch\"]").with_delay(Duration::from_secs(30));
/// assert_eq!(ok.call_count(), 0);
/// # let _ = (failing, slow);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    response: Result<String, String>,
    delay: Option<Duration>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a MockProvider with a fixed raw response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            delay: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a MockProvider whose every call fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            ..Self::new("")
        }
    }

    /// Wait before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times recommend was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"["Take a 20 minute walk every day", "Add a serving of vegetables to each meal"]"#)
    }
}

impl RecommendationProvider for MockProvider {
    type Error = LlmError;

    async fn recommend(
        &self,
        _level: RiskLevel,
        _factors: &[FactorTag],
    ) -> Result<Vec<String>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            Ok(raw) => parse_recommendation_list(raw),
            Err(message) => Err(LlmError::Other(message.clone())),
        }
    }
}
