//! Prompt construction for recommendation requests

use vitalis_domain::{FactorTag, RiskLevel};

/// Upper bound on items requested from the model
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// System message sent ahead of every recommendation prompt
pub const SYSTEM_INSTRUCTIONS: &str = "You are a preventive health assistant. \
You give short, practical lifestyle advice. You never diagnose and never prescribe medication.";

const OUTPUT_FORMAT_REMINDER: &str = "Respond with ONLY a JSON array of strings, one recommendation per string. \
No markdown, no numbering, no commentary.";

/// Builds the user prompt for a recommendation request
#[derive(Debug, Clone)]
pub struct RecommendationPrompt {
    level: RiskLevel,
    factors: Vec<FactorTag>,
}

impl RecommendationPrompt {
    /// Create a prompt for a risk level and its detected factors
    pub fn new(level: RiskLevel, factors: &[FactorTag]) -> Self {
        Self {
            level,
            factors: factors.to_vec(),
        }
    }

    /// Build the complete prompt text
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!("Overall health risk level: {}\n", self.level));

        if self.factors.is_empty() {
            prompt.push_str("No specific risk factors were detected.\n");
        } else {
            prompt.push_str("Detected risk factors:\n");
            for factor in &self.factors {
                prompt.push_str(&format!("- {}\n", factor));
            }
        }
        prompt.push('\n');

        prompt.push_str(&format!(
            "Suggest at most {} concise, actionable lifestyle recommendations that address these factors.\n\n",
            DEFAULT_MAX_ITEMS
        ));
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_factors() {
        let prompt = RecommendationPrompt::new(
            RiskLevel::High,
            &[FactorTag::Smoking, FactorTag::PoorSleep],
        )
        .build();

        assert!(prompt.contains("Overall health risk level: high"));
        assert!(prompt.contains("- smoking\n"));
        assert!(prompt.contains("- poor sleep\n"));
        assert!(prompt.contains("at most 4"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_prompt_without_factors() {
        let prompt = RecommendationPrompt::new(RiskLevel::Low, &[]).build();
        assert!(prompt.contains("No specific risk factors"));
    }
}
