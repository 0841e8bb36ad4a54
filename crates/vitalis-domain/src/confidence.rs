//! Confidence value helpers
//!
//! Two independent confidence values exist per request: the extraction-stage
//! estimate (how complete and reliable the input was) and the factor-stage
//! estimate (how much the rule-based inference can be trusted given data
//! density). Both are plain `f64` in [0, 1] normalized through
//! [`round_confidence`]; they are never combined.

/// Clamp to [0.0, 1.0] and round to two decimal places
///
/// Non-finite input collapses to 0.0.
pub fn round_confidence(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.clamp(0.0, 1.0) * 100.0).round() / 100.0
}
