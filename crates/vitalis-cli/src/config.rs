//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vitalis_advisor::AdvisorConfig;
use vitalis_extractor::ExtractorConfig;
use vitalis_gatekeeper::ValidationConfig;
use vitalis_llm::chat::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use vitalis_pipeline::DEFAULT_OCR_TIMEOUT_SECS;

/// Environment variable holding the recommender API key
pub const API_KEY_ENV: &str = "VITALIS_API_KEY";

const REDACTED: &str = "********";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Field extraction and confidence settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Guardrail thresholds
    #[serde(default)]
    pub guardrails: ValidationConfig,

    /// Recommendation service
    #[serde(default)]
    pub recommender: RecommenderConfig,

    /// OCR engine
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Recommendation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// OpenAI-compatible API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// API key; AI recommendations are disabled without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Upper bound on one recommendation call (seconds)
    pub timeout_secs: u64,
}

/// OCR engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Engine endpoint; image input is disabled without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".vitalis").join("config.toml"))
    }

    /// Load configuration from `path` (or the default path), then apply the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        let mut config = Self::load_from(&path)?;
        config.apply_env_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = self.to_toml()?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Use `key` as the API key when the file did not set one.
    pub fn apply_env_key(&mut self, key: Option<String>) {
        if self.recommender.api_key().is_none() {
            if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
                self.recommender.api_key = Some(key);
            }
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        self.guardrails
            .validate()
            .map_err(|e| CliError::Config(format!("[guardrails] {}", e)))?;
        self.recommender
            .advisor_config()
            .validate()
            .map_err(|e| CliError::Config(format!("[recommender] {}", e)))?;
        if self.ocr.timeout_secs == 0 {
            return Err(CliError::Config("[ocr] timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.recommender.api_key.is_some() {
            config.recommender.api_key = Some(REDACTED.to_string());
        }
        config
    }
}

impl RecommenderConfig {
    /// Non-blank API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Advisor settings derived from this section
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            ai_timeout_secs: self.timeout_secs,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: AdvisorConfig::default().ai_timeout_secs,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_OCR_TIMEOUT_SECS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
