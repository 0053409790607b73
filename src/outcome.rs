use std::process::ExitCode;

use crate::models::SessionState;

/// How the process ends. Each path has its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Session ran to `Succeeded` or `Exhausted`.
    Completed,
    WordlistUnavailable,
    InvalidConfig,
    Unreachable,
    Declined,
    /// The endpoint rate limited us. Expected, not a tool failure.
    Defended,
    /// Local I/O or client setup failed before the session could run.
    Internal,
}

impl RunOutcome {
    pub fn code(&self) -> u8 {
        match self {
            RunOutcome::Completed => 0,
            RunOutcome::WordlistUnavailable => 1,
            RunOutcome::InvalidConfig => 2,
            RunOutcome::Unreachable => 3,
            RunOutcome::Declined => 4,
            RunOutcome::Defended => 5,
            RunOutcome::Internal => 6,
        }
    }
}

impl From<SessionState> for RunOutcome {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Defended => RunOutcome::Defended,
            SessionState::Aborted => RunOutcome::Unreachable,
            SessionState::Succeeded | SessionState::Exhausted | SessionState::Running => {
                RunOutcome::Completed
            }
        }
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.code())
    }
}
