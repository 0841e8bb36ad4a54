//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vitalis_assessor::LabelScore;
use vitalis_domain::RiskLevel;
use vitalis_gatekeeper::Rejection;
use vitalis_pipeline::{AnalysisBody, AnalysisResponse};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an analysis response.
    pub fn format_response(&self, response: &AnalysisResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => Ok(match response {
                AnalysisResponse::Ok(body) => self.format_analysis_table(body),
                AnalysisResponse::Rejected(rejection) => self.format_rejection(rejection),
            }),
        }
    }

    fn format_analysis_table(&self, body: &AnalysisBody) -> String {
        let mut out = String::new();

        let mut answers = Builder::default();
        answers.push_record(["Field", "Value"]);
        for (field, value) in body.answers.iter() {
            answers.push_record([field.as_str().to_string(), display_value(value)]);
        }
        for field in &body.missing_fields {
            answers.push_record([field.as_str().to_string(), self.colorize("(missing)", "yellow")]);
        }
        out.push_str(&styled(answers));
        out.push('\n');

        let factors = if body.factors.is_empty() {
            "none".to_string()
        } else {
            join(&body.factors)
        };
        let confidence = match body.ocr_confidence {
            Some(ocr) => format!("{:.2} (OCR {:.2})", body.confidence, ocr),
            None => format!("{:.2}", body.confidence),
        };

        let mut summary = Builder::default();
        summary.push_record(["Risk score", "Risk level", "Factors", "Rationale", "Confidence"]);
        summary.push_record([
            body.risk_score.to_string(),
            self.risk_level(body.risk_level),
            factors,
            join(&body.rationale),
            confidence,
        ]);
        out.push_str(&styled(summary));
        out.push_str("\n\n");

        out.push_str(&format!("Recommendations ({}):\n", body.source));
        for (i, item) in body.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, item));
        }
        out
    }

    fn format_rejection(&self, rejection: &Rejection) -> String {
        let mut out = self.error(&format!("{}: {}", rejection.status(), rejection.reason()));
        match rejection {
            Rejection::IncompleteProfile {
                missing_fields,
                confidence,
                ..
            } => {
                out.push_str(&format!("\n  missing: {}", join(missing_fields)));
                out.push_str(&format!("\n  confidence: {:.2}", confidence));
            }
            Rejection::LowConfidence {
                confidence,
                ocr_confidence,
                ..
            } => {
                out.push_str(&format!("\n  confidence: {:.2}", confidence));
                if let Some(ocr) = ocr_confidence {
                    out.push_str(&format!("\n  OCR confidence: {:.2}", ocr));
                }
            }
            Rejection::InvalidData { field, .. } => {
                out.push_str(&format!("\n  field: {}", field));
            }
        }
        out
    }

    /// Format a label score.
    pub fn format_score(&self, score: &LabelScore) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "risk_score": score.score,
                "risk_level": score.level,
                "unrecognized": score.unrecognized,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Risk score", "Risk level"]);
                builder.push_record([score.score.to_string(), self.risk_level(score.level)]);
                Ok(styled(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn risk_level(&self, level: RiskLevel) -> String {
        let color = match level {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "red",
        };
        self.colorize(level.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
