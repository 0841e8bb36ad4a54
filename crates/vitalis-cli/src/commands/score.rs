//! Score command implementation.

use super::RunStatus;
use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vitalis_assessor::{score_labels, UNRECOGNIZED_FACTOR_WEIGHT};

/// Execute the score command.
pub async fn execute_score(args: ScoreArgs, formatter: &Formatter) -> Result<RunStatus> {
    if let Some(age) = args.age {
        if age < 0 {
            return Err(CliError::InvalidInput(format!("Age must not be negative, got {}", age)));
        }
    }

    let score = score_labels(&args.factors, args.age);
    for label in &score.unrecognized {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Unrecognized factor '{}' scored with default weight {}",
                label, UNRECOGNIZED_FACTOR_WEIGHT
            ))
        );
    }

    println!("{}", formatter.format_score(&score)?);
    Ok(RunStatus::Success)
}
