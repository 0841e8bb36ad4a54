//! CLI command definitions and argument parsing.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Vitalis CLI - Lifestyle survey health-risk analysis.
#[derive(Debug, Parser)]
#[command(name = "vitalis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VITALIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a survey response
    Analyze(AnalyzeArgs),

    /// Score factor labels directly
    Score(ScoreArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["text", "file", "json", "data_file", "image"])
))]
pub struct AnalyzeArgs {
    /// Free text answers (e.g. "Age: 42\nSmoker: yes")
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read free text answers from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Structured answers as a JSON object
    #[arg(short, long)]
    pub json: Option<String>,

    /// Read structured answers from a JSON file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Image of a filled-in survey (requires an OCR endpoint)
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Use the static recommendation rules even if an API key is configured
    #[arg(long)]
    pub no_ai: bool,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Factor label (repeatable), e.g. "smoking" or "poor sleep"
    #[arg(long = "factor", required = true)]
    pub factors: Vec<String>,

    /// Age for the age escalator
    #[arg(short, long)]
    pub age: Option<i64>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (API key redacted)
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text() {
        let cli = Cli::parse_from(["vitalis", "analyze", "--text", "Age: 42"]);
        match cli.command {
            Command::Analyze(args) => assert_eq!(args.text.as_deref(), Some("Age: 42")),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_one_input() {
        assert!(Cli::try_parse_from(["vitalis", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["vitalis", "analyze", "--text", "a", "--json", "{}"]).is_err());
    }

    #[test]
    fn test_score_factors_repeat() {
        let cli = Cli::parse_from([
            "vitalis", "score", "--factor", "smoking", "--factor", "poor sleep", "--age", "60",
        ]);
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.factors, vec!["smoking", "poor sleep"]);
                assert_eq!(args.age, Some(60));
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vitalis", "config", "show", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Show })
        ));
    }
}
