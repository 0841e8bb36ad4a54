//! Config command implementation.

use super::RunStatus;
use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<RunStatus> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", show(config, formatter.format())?);
        }
        ConfigAction::Init { force } => {
            init(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(RunStatus::Success)
}

/// Render the effective configuration with secrets masked.
pub fn show(config: &Config, format: OutputFormat) -> Result<String> {
    let redacted = config.redacted();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&redacted)?),
        OutputFormat::Table => redacted.to_toml(),
    }
}

/// Write a default configuration file.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(init(&path, false), Err(CliError::Config(_))));
        init(&path, true).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }

    #[test]
    fn test_show_redacts_key() {
        let mut config = Config::default();
        config.recommender.api_key = Some("sk-secret".to_string());

        for format in [OutputFormat::Table, OutputFormat::Json] {
            let shown = show(&config, format).unwrap();
            assert!(!shown.contains("sk-secret"));
            assert!(shown.contains("gpt-4o-mini"));
        }
    }
}
