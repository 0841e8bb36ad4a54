//! Response surface
//!
//! The JSON produced here is the contract external callers rely on: a
//! `status` of `ok` with the full analysis, or one of the guardrail
//! rejection statuses with its reason and context.

use serde::Serialize;
use vitalis_domain::{AnswerSet, FactorTag, Field, RecommendationSource, RiskLevel};
use vitalis_gatekeeper::Rejection;

/// Successful analysis body, serialized with `"status": "ok"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename = "ok")]
pub struct AnalysisBody {
    /// Extracted answers
    pub answers: AnswerSet,

    /// Required fields absent from the input
    pub missing_fields: Vec<Field>,

    /// Extraction-stage confidence
    pub confidence: f64,

    /// OCR engine confidence, image input only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_confidence: Option<f64>,

    /// Detected factor tags in detection order
    pub factors: Vec<FactorTag>,

    /// Factor-stage confidence
    pub factor_confidence: f64,

    /// Risk score in [0, 100]
    pub risk_score: u8,

    /// Risk level band
    pub risk_level: RiskLevel,

    /// First three factor tags
    pub rationale: Vec<FactorTag>,

    /// Recommendation items
    pub recommendations: Vec<String>,

    /// Strategy that produced the recommendations
    pub source: RecommendationSource,
}

/// Response for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    /// Completed analysis
    Ok(AnalysisBody),
    /// Guardrail rejection
    Rejected(Rejection),
}

impl AnalysisResponse {
    /// Wire status literal
    pub fn status(&self) -> &'static str {
        match self {
            AnalysisResponse::Ok(_) => "ok",
            AnalysisResponse::Rejected(rejection) => rejection.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_body_wire_shape() {
        let body = AnalysisBody {
            answers: AnswerSet::new().with(Field::Age, 42).with(Field::Smoker, true),
            missing_fields: vec![Field::Exercise],
            confidence: 0.5,
            ocr_confidence: None,
            factors: vec![FactorTag::Smoking],
            factor_confidence: 0.7,
            risk_score: 25,
            risk_level: RiskLevel::Low,
            rationale: vec![FactorTag::Smoking],
            recommendations: vec!["Quit smoking".to_string()],
            source: RecommendationSource::Static,
        };

        let value = serde_json::to_value(AnalysisResponse::Ok(body)).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "ok",
                "answers": {"age": 42, "smoker": true},
                "missing_fields": ["exercise"],
                "confidence": 0.5,
                "factors": ["smoking"],
                "factor_confidence": 0.7,
                "risk_score": 25,
                "risk_level": "low",
                "rationale": ["smoking"],
                "recommendations": ["Quit smoking"],
                "source": "static"
            })
        );
    }

    #[test]
    fn test_rejection_wire_shape() {
        let response = AnalysisResponse::Rejected(Rejection::InvalidData {
            reason: "age must be between 1 and 120".to_string(),
            field: Field::Age,
        });
        assert_eq!(response.status(), "invalid_data");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "invalid_data");
        assert_eq!(value["field"], "age");
        assert!(value["reason"].is_string());
    }
}
