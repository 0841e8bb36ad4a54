//! Command implementations.

pub mod analyze;
pub mod config;
pub mod score;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::score::execute_score;

/// How a command finished, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Command completed
    Success,
    /// A guardrail rejected the survey
    Rejected,
}

impl RunStatus {
    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Rejected => 2,
        }
    }
}
