//! Analyze command implementation.

use super::RunStatus;
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde_json::Value;
use std::fs;
use std::time::Duration;
use tracing::debug;
use vitalis_advisor::Advisor;
use vitalis_llm::ChatCompletionsProvider;
use vitalis_pipeline::{Analyzer, HttpOcrEngine, SurveyRequest};

/// Analyzer used by the CLI
pub type CliAnalyzer = Analyzer<HttpOcrEngine, ChatCompletionsProvider>;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<RunStatus> {
    let use_ai = !args.no_ai;
    let request = build_request(args)?;
    let analyzer = build_analyzer(config, use_ai)?;

    let outcome = analyzer.analyze(request).await?;
    let status = if outcome.is_rejected() {
        RunStatus::Rejected
    } else {
        RunStatus::Success
    };

    println!("{}", formatter.format_response(&outcome.into_response())?);
    Ok(status)
}

/// Turn command-line input into a pipeline request.
pub fn build_request(args: AnalyzeArgs) -> Result<SurveyRequest> {
    if let Some(text) = args.text {
        return Ok(SurveyRequest::text(text));
    }
    if let Some(path) = args.file {
        return Ok(SurveyRequest::text(fs::read_to_string(path)?));
    }
    if let Some(json) = args.json {
        return Ok(SurveyRequest::data(parse_record(&json)?));
    }
    if let Some(path) = args.data_file {
        return Ok(SurveyRequest::data(parse_record(&fs::read_to_string(path)?)?));
    }
    if let Some(path) = args.image {
        return Ok(SurveyRequest::image(fs::read(path)?));
    }
    Err(CliError::InvalidInput(
        "one of --text, --file, --json, --data-file, or --image is required".to_string(),
    ))
}

fn parse_record(json: &str) -> Result<Value> {
    serde_json::from_str(json)
        .map_err(|e| CliError::InvalidInput(format!("Structured answers are not valid JSON: {}", e)))
}

/// Build an analyzer from the configuration.
///
/// AI recommendations need an API key; image input needs an OCR endpoint.
pub fn build_analyzer(config: &Config, use_ai: bool) -> Result<CliAnalyzer> {
    let recommender = &config.recommender;
    let advisor = match recommender.api_key().filter(|_| use_ai) {
        Some(key) => {
            let provider = ChatCompletionsProvider::with_timeout(
                recommender.endpoint.clone(),
                recommender.model.clone(),
                key,
                Duration::from_secs(recommender.timeout_secs),
            )?;
            debug!("AI recommendations enabled ({})", recommender.model);
            Advisor::new(provider, recommender.advisor_config())
        }
        None => Advisor::static_only(recommender.advisor_config()),
    };

    let mut analyzer = Analyzer::new(advisor)
        .with_extractor_config(config.extractor.clone())
        .with_validation_config(config.guardrails.clone());

    if let Some(endpoint) = &config.ocr.endpoint {
        let engine = HttpOcrEngine::new(endpoint.clone(), Duration::from_secs(config.ocr.timeout_secs))?;
        analyzer = analyzer.with_ocr(engine);
    }

    Ok(analyzer)
}
