//! Analyzer: the six-stage request pipeline

use crate::error::PipelineError;
use crate::input::{SurveyInput, SurveyRequest};
use crate::response::{AnalysisBody, AnalysisResponse};
use std::fmt::Display;
use tracing::{debug, info};
use vitalis_advisor::{Advisor, AdvisorConfig, Recommendations};
use vitalis_assessor::{extract_factors, score_risk, FactorAnalysis, RiskAssessment};
use vitalis_domain::traits::{OcrEngine, RecommendationProvider};
use vitalis_domain::{AnswerSet, Field, InputKind};
use vitalis_extractor::{ConfidenceReport, ExtractorConfig, FieldExtractor};
use vitalis_gatekeeper::{Gatekeeper, Rejection, ValidationConfig, ValidationResult};

/// Everything a completed analysis produced
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Extracted answers
    pub answers: AnswerSet,
    /// Required fields absent from the input
    pub missing_fields: Vec<Field>,
    /// Extraction-stage confidence
    pub confidence: ConfidenceReport,
    /// Factor tags and factor-stage confidence
    pub factors: FactorAnalysis,
    /// Score, level, and rationale
    pub risk: RiskAssessment,
    /// Recommendations and their source
    pub recommendations: Recommendations,
}

/// Result of a request that reached the guardrails
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// All stages ran
    Completed(AnalysisReport),
    /// A guardrail stopped the request before scoring
    Rejected(Rejection),
}

impl AnalysisOutcome {
    /// Whether the request was rejected by a guardrail
    pub fn is_rejected(&self) -> bool {
        matches!(self, AnalysisOutcome::Rejected(_))
    }

    /// Convert to the wire response
    pub fn into_response(self) -> AnalysisResponse {
        match self {
            AnalysisOutcome::Rejected(rejection) => AnalysisResponse::Rejected(rejection),
            AnalysisOutcome::Completed(report) => AnalysisResponse::Ok(AnalysisBody {
                answers: report.answers,
                missing_fields: report.missing_fields,
                confidence: report.confidence.confidence,
                ocr_confidence: report.confidence.ocr_confidence,
                factors: report.factors.factors,
                factor_confidence: report.factors.confidence,
                risk_score: report.risk.score,
                risk_level: report.risk.level,
                rationale: report.risk.rationale,
                recommendations: report.recommendations.items,
                source: report.recommendations.source,
            }),
        }
    }
}

/// Runs extraction, confidence, guardrails, factors, scoring, and
/// recommendations in that order
///
/// A guardrail rejection stops the request before any scoring. Nothing is
/// shared between requests; one `Analyzer` can serve many concurrently.
pub struct Analyzer<O, P> {
    extractor: FieldExtractor,
    gatekeeper: Gatekeeper,
    advisor: Advisor<P>,
    ocr: Option<O>,
}

impl<O, P> Analyzer<O, P>
where
    O: OcrEngine + Sync,
    O::Error: Display,
    P: RecommendationProvider + Sync,
    P::Error: Display,
{
    /// Create an analyzer with default extraction and guardrail settings
    pub fn new(advisor: Advisor<P>) -> Self {
        Self {
            extractor: FieldExtractor::default(),
            gatekeeper: Gatekeeper::default(),
            advisor,
            ocr: None,
        }
    }

    /// Create an analyzer that only uses static recommendations
    pub fn static_only() -> Self {
        Self::new(Advisor::static_only(AdvisorConfig::default()))
    }

    /// Use custom extraction settings
    pub fn with_extractor_config(mut self, config: ExtractorConfig) -> Self {
        self.extractor = FieldExtractor::new(config);
        self
    }

    /// Use custom guardrail thresholds
    pub fn with_validation_config(mut self, config: ValidationConfig) -> Self {
        self.gatekeeper = Gatekeeper::new(config);
        self
    }

    /// Enable image input
    pub fn with_ocr(mut self, engine: O) -> Self {
        self.ocr = Some(engine);
        self
    }

    /// Analyze a raw request
    pub async fn analyze(&self, request: SurveyRequest) -> Result<AnalysisOutcome, PipelineError> {
        let input = SurveyInput::try_from(request)?;
        self.analyze_input(input).await
    }

    /// Analyze a validated input
    ///
    /// # Errors
    ///
    /// Input-shape problems and OCR failures. Guardrail rejections are
    /// returned as `Ok(AnalysisOutcome::Rejected(..))`.
    pub async fn analyze_input(&self, input: SurveyInput) -> Result<AnalysisOutcome, PipelineError> {
        let (extraction, kind, ocr_confidence) = match input {
            SurveyInput::Text(text) => (self.extractor.extract(&text)?, InputKind::Text, None),
            SurveyInput::Structured(record) => {
                (self.extractor.extract_structured(&record)?, InputKind::Text, None)
            }
            SurveyInput::Image(image) => {
                let engine = self.ocr.as_ref().ok_or(PipelineError::OcrUnavailable)?;
                let output = engine
                    .recognize(&image)
                    .await
                    .map_err(|e| PipelineError::Ocr(e.to_string()))?;
                debug!("OCR recovered {} chars at confidence {:.2}", output.text.len(), output.confidence);
                (
                    self.extractor.extract(&output.text)?,
                    InputKind::Image,
                    Some(output.confidence),
                )
            }
        };

        let confidence = self
            .extractor
            .estimate_confidence(&extraction, kind, ocr_confidence);

        let validation = self.gatekeeper.validate(
            &extraction.answers,
            &extraction.missing_fields,
            confidence.confidence,
            confidence.ocr_confidence,
        );
        if let ValidationResult::Rejected(rejection) = validation {
            return Ok(AnalysisOutcome::Rejected(rejection));
        }

        let factors = extract_factors(&extraction.answers);
        let risk = score_risk(&factors.factors, &extraction.answers);
        let recommendations = self.advisor.recommend(risk.level, &factors.factors).await;

        info!(
            "Analysis complete: score {} ({}), {} factor(s), {} recommendation(s) from {}",
            risk.score,
            risk.level,
            factors.factors.len(),
            recommendations.items.len(),
            recommendations.source
        );

        Ok(AnalysisOutcome::Completed(AnalysisReport {
            answers: extraction.answers,
            missing_fields: extraction.missing_fields,
            confidence,
            factors,
            risk,
            recommendations,
        }))
    }
}
