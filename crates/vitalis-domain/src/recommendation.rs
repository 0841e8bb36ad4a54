//! Recommendation provenance and item cleanup

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which strategy produced a recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationSource {
    /// Produced by the generative recommendation service
    #[serde(rename = "ai-generated")]
    AiGenerated,
    /// Produced by the fixed rule table
    #[serde(rename = "static")]
    Static,
}

impl RecommendationSource {
    /// Get the source tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::AiGenerated => "ai-generated",
            RecommendationSource::Static => "static",
        }
    }
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remove a leading bullet (`-`, `*`, `•`) or number marker (`1.`, `2)`)
///
/// A bare number without `.` or `)` is part of the text and is kept.
pub fn strip_list_marker(item: &str) -> &str {
    let item = item.trim();
    let item = item
        .strip_prefix(['-', '*', '•'])
        .map(str::trim_start)
        .unwrap_or(item);

    let digits = item.chars().take_while(|c| c.is_ascii_digit()).count();
    match item[digits..].strip_prefix(['.', ')']) {
        Some(rest) if digits > 0 => rest.trim(),
        _ => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bullets_and_numbers() {
        assert_eq!(strip_list_marker("- Walk daily"), "Walk daily");
        assert_eq!(strip_list_marker("• Sleep more "), "Sleep more");
        assert_eq!(strip_list_marker("2) Drink water"), "Drink water");
        assert_eq!(strip_list_marker("10. Stretch"), "Stretch");
    }

    #[test]
    fn test_number_prefix_without_marker_kept() {
        assert_eq!(strip_list_marker("8 glasses of water"), "8 glasses of water");
    }

    #[test]
    fn test_marker_only_is_empty() {
        assert_eq!(strip_list_marker("-"), "");
        assert_eq!(strip_list_marker("3."), "");
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(RecommendationSource::AiGenerated.to_string(), "ai-generated");
        assert_eq!(RecommendationSource::Static.as_str(), "static");
    }
}
