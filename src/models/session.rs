use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

use super::{AttemptResult, Candidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    /// A candidate produced a token.
    Succeeded,
    /// The endpoint answered 429.
    Defended,
    /// Every candidate was tried without a terminal outcome.
    Exhausted,
    /// The endpoint could not be reached.
    Aborted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Running)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Running => "Running",
            SessionState::Succeeded => "Succeeded",
            SessionState::Defended => "Defended",
            SessionState::Exhausted => "Exhausted",
            SessionState::Aborted => "Aborted",
        };
        write!(f, "{}", s)
    }
}

/// Mutable counters for one test run.
///
/// Terminal states absorb: once the session leaves `Running`, further calls to
/// [`Session::record`] or [`Session::abort`] change nothing.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    attempts: usize,
    transient_errors: usize,
    started_at: Instant,
    discovered: Option<Candidate>,
    token: Option<String>,
    abort_reason: Option<String>,
}

impl Session {
    pub fn start() -> Self {
        Self {
            state: SessionState::Running,
            attempts: 0,
            transient_errors: 0,
            started_at: Instant::now(),
            discovered: None,
            token: None,
            abort_reason: None,
        }
    }

    /// Counts one issued request and applies its verdict.
    pub fn record(&mut self, candidate: &Candidate, result: AttemptResult) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.attempts += 1;

        match result {
            AttemptResult::Success(token) => {
                self.discovered = Some(candidate.clone());
                self.token = Some(token);
                self.state = SessionState::Succeeded;
            }
            AttemptResult::RateLimited => self.state = SessionState::Defended,
            AttemptResult::TransientError(_) => self.transient_errors += 1,
            AttemptResult::Failure => {}
        }

        self.state
    }

    /// Counts the failed request and stops the session.
    pub fn abort(&mut self, reason: impl Into<String>) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.attempts += 1;
        self.abort_reason = Some(reason.into());
        self.state = SessionState::Aborted;
        self.state
    }

    pub fn finish(mut self) -> SessionReport {
        if self.state == SessionState::Running {
            self.state = SessionState::Exhausted;
        }

        SessionReport {
            state: self.state,
            attempts: self.attempts,
            transient_errors: self.transient_errors,
            elapsed: self.started_at.elapsed(),
            discovered: self.discovered,
            token: self.token,
            abort_reason: self.abort_reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub state: SessionState,
    pub attempts: usize,
    pub transient_errors: usize,
    pub elapsed: Duration,
    pub discovered: Option<Candidate>,
    pub token: Option<String>,
    pub abort_reason: Option<String>,
}

impl SessionReport {
    pub fn attempts_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.attempts as f64 / self.elapsed.as_secs_f64()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(s: &str) -> Candidate {
        Candidate::new(s).unwrap()
    }

    fn report(attempts: usize, elapsed: Duration) -> SessionReport {
        SessionReport {
            state: SessionState::Exhausted,
            attempts,
            transient_errors: 0,
            elapsed,
            discovered: None,
            token: None,
            abort_reason: None,
        }
    }

    #[tokio::test]
    async fn test_success_records_candidate() {
        let mut session = Session::start();
        session.record(&candidate("123456"), AttemptResult::Failure);
        let state = session.record(&candidate("letmein"), AttemptResult::Success("xyz".into()));

        assert_eq!(state, SessionState::Succeeded);
        let report = session.finish();
        assert_eq!(report.attempts, 2);
        assert_eq!(report.discovered, Some(candidate("letmein")));
        assert_eq!(report.token.as_deref(), Some("xyz"));
    }

    #[tokio::test]
    async fn test_terminal_state_absorbs() {
        let mut session = Session::start();
        session.record(&candidate("a"), AttemptResult::RateLimited);
        session.record(&candidate("b"), AttemptResult::Success("tok".into()));
        session.abort("refused");

        let report = session.finish();
        assert_eq!(report.state, SessionState::Defended);
        assert_eq!(report.attempts, 1);
        assert!(report.discovered.is_none());
        assert!(report.abort_reason.is_none());
    }

    #[tokio::test]
    async fn test_transient_errors_counted_as_attempts() {
        let mut session = Session::start();
        session.record(&candidate("a"), AttemptResult::TransientError("timeout".into()));
        session.record(&candidate("b"), AttemptResult::Failure);

        let report = session.finish();
        assert_eq!(report.state, SessionState::Exhausted);
        assert_eq!(report.attempts, 2);
        assert_eq!(report.transient_errors, 1);
    }

    #[tokio::test]
    async fn test_abort_counts_failed_request() {
        let mut session = Session::start();
        session.record(&candidate("a"), AttemptResult::Failure);
        assert_eq!(session.abort("connection refused"), SessionState::Aborted);

        let report = session.finish();
        assert_eq!(report.attempts, 2);
        assert_eq!(report.abort_reason.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_attempts_per_second() {
        assert_eq!(report(10, Duration::ZERO).attempts_per_second(), 0.0);
        assert_eq!(report(10, Duration::from_secs(4)).attempts_per_second(), 2.5);
        assert_eq!(report(0, Duration::from_secs(1)).attempts_per_second(), 0.0);
    }
}
