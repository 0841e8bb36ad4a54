//! Recommendation strategy selection

use crate::config::AdvisorConfig;
use crate::rules::{static_recommendations, MAX_RECOMMENDATIONS};
use serde::Serialize;
use std::fmt::Display;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use vitalis_domain::traits::RecommendationProvider;
use vitalis_domain::{strip_list_marker, FactorTag, RecommendationSource, RiskLevel};

/// A recommendation list and the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Between 1 and 5 items
    pub items: Vec<String>,

    /// Which strategy produced the items
    pub source: RecommendationSource,
}

impl Recommendations {
    fn fallback(level: RiskLevel, factors: &[FactorTag]) -> Self {
        Self {
            items: static_recommendations(level, factors),
            source: RecommendationSource::Static,
        }
    }
}

/// Produces recommendations from a provider, falling back to static rules
///
/// Without a provider every call uses the static rules. With one, the
/// provider is called once under a timeout; a timeout, an error, or an empty
/// list all fall back to the static rules.
pub struct Advisor<P> {
    provider: Option<P>,
    config: AdvisorConfig,
}

impl<P> Advisor<P>
where
    P: RecommendationProvider + Sync,
    P::Error: Display,
{
    /// Create an advisor that calls `provider` first
    pub fn new(provider: P, config: AdvisorConfig) -> Self {
        Self {
            provider: Some(provider),
            config,
        }
    }

    /// Create an advisor that only uses the static rules
    pub fn static_only(config: AdvisorConfig) -> Self {
        Self {
            provider: None,
            config,
        }
    }

    /// Whether a provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Get the configuration
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommend for a risk level and its factors
    pub async fn recommend(&self, level: RiskLevel, factors: &[FactorTag]) -> Recommendations {
        let Some(provider) = &self.provider else {
            debug!("No recommendation provider configured, using static rules");
            return Recommendations::fallback(level, factors);
        };

        match timeout(self.config.ai_timeout(), provider.recommend(level, factors)).await {
            Ok(Ok(raw)) => {
                let items = normalize(raw);
                if items.is_empty() {
                    warn!("Recommendation provider returned no usable items, using static rules");
                    return Recommendations::fallback(level, factors);
                }
                info!("Generated {} recommendation(s)", items.len());
                Recommendations {
                    items,
                    source: RecommendationSource::AiGenerated,
                }
            }
            Ok(Err(e)) => {
                warn!("Recommendation provider failed: {}, using static rules", e);
                Recommendations::fallback(level, factors)
            }
            Err(_) => {
                warn!(
                    "Recommendation provider timed out after {}s, using static rules",
                    self.config.ai_timeout_secs
                );
                Recommendations::fallback(level, factors)
            }
        }
    }
}

/// Strip list markers, drop blanks, and cap the list length
pub fn normalize(raw: Vec<String>) -> Vec<String> {
    raw.iter()
        .map(|item| strip_list_marker(item))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MIN_STATIC_RECOMMENDATIONS;
    use std::time::Duration;
    use vitalis_llm::MockProvider;

    fn config() -> AdvisorConfig {
        AdvisorConfig::default()
    }

    #[tokio::test]
    async fn test_static_only() {
        let advisor = Advisor::<MockProvider>::static_only(config());
        assert!(!advisor.has_provider());

        let result = advisor.recommend(RiskLevel::Low, &[]).await;
        assert_eq!(result.source, RecommendationSource::Static);
        assert_eq!(result.items.len(), MIN_STATIC_RECOMMENDATIONS);
    }

    #[tokio::test]
    async fn test_provider_success() {
        let provider = MockProvider::new(r#"["- Quit smoking", "2. Walk daily", "  "]"#);
        let advisor = Advisor::new(provider.clone(), config());

        let result = advisor.recommend(RiskLevel::High, &[FactorTag::Smoking]).await;
        assert_eq!(result.source, RecommendationSource::AiGenerated);
        assert_eq!(result.items, vec!["Quit smoking", "Walk daily"]);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_once() {
        let provider = MockProvider::failing("connection refused");
        let advisor = Advisor::new(provider.clone(), config());

        let result = advisor.recommend(RiskLevel::High, &[FactorTag::Smoking]).await;
        assert_eq!(result.source, RecommendationSource::Static);
        assert_eq!(result.items, static_recommendations(RiskLevel::High, &[FactorTag::Smoking]));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back() {
        let advisor = Advisor::new(MockProvider::new("```\n```"), config());
        let result = advisor.recommend(RiskLevel::Medium, &[]).await;
        assert_eq!(result.source, RecommendationSource::Static);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let provider = MockProvider::default().with_delay(Duration::from_secs(30));
        let advisor = Advisor::new(provider, AdvisorConfig { ai_timeout_secs: 1 });

        let result = advisor.recommend(RiskLevel::Medium, &[FactorTag::PoorSleep]).await;
        assert_eq!(result.source, RecommendationSource::Static);
    }

    #[tokio::test]
    async fn test_long_provider_list_truncated() {
        let provider = MockProvider::new(r#"["a", "b", "c", "d", "e", "f", "g"]"#);
        let advisor = Advisor::new(provider, config());
        let result = advisor.recommend(RiskLevel::Low, &[]).await;
        assert_eq!(result.items.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_normalize_only_blank_is_empty() {
        assert!(normalize(vec![" ".to_string(), "-".to_string(), "3.".to_string()]).is_empty());
    }

    #[test]
    fn test_recommendations_serialize() {
        let recs = Recommendations {
            items: vec!["Walk".to_string()],
            source: RecommendationSource::AiGenerated,
        };
        let json = serde_json::to_value(&recs).unwrap();
        assert_eq!(json["source"], "ai-generated");
    }
}
