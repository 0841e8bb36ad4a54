//! Configuration for the Advisor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for recommendation generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Upper bound on one provider call (seconds)
    pub ai_timeout_secs: u64,
}

impl AdvisorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ai_timeout_secs == 0 {
            return Err("ai_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Provider call timeout as a Duration
    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self { ai_timeout_secs: 10 }
    }
}
