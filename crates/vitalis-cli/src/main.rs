//! Vitalis CLI - Lifestyle survey health-risk analysis.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitalis_cli::cli::{ConfigAction, ConfigArgs};
use vitalis_cli::commands;
use vitalis_cli::{Cli, Command, Config, Formatter, RunStatus};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `--verbose` wins over `RUST_LOG`, which wins over `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> vitalis_cli::Result<RunStatus> {
    let path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    // `config init` must work even when the existing file is broken
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::load(Some(&path)).unwrap_or_default(),
        _ => Config::load(Some(&path))?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await,
        Command::Score(args) => commands::execute_score(args, &formatter).await,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter).await,
    }
}
