use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::http::AuthEndpoint;
use crate::models::{AttemptResult, Candidate, Session, SessionReport};

/// Tries candidates one at a time against a single endpoint.
pub struct AttemptRunner<E> {
    endpoint: E,
    delay: Duration,
    progress: ProgressBar,
}

impl<E: AuthEndpoint> AttemptRunner<E> {
    pub fn new(endpoint: E, delay: Duration) -> Self {
        Self {
            endpoint,
            delay,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Runs until the first terminal verdict or the end of `candidates`.
    ///
    /// Each candidate is sent exactly once, in order. The delay is applied
    /// between attempts only, never before the first or after the last.
    pub async fn run(&self, candidates: &[Candidate]) -> SessionReport {
        let total = candidates.len();
        let mut session = Session::start();

        for (index, candidate) in candidates.iter().enumerate() {
            self.progress.set_message(format!("Testing: {:<20}", candidate));

            let state = match self.endpoint.attempt(candidate).await {
                Ok(result) => {
                    debug!(attempt = index + 1, password = %candidate, verdict = %result, "attempt complete");
                    if let AttemptResult::TransientError(reason) = &result {
                        warn!(attempt = index + 1, %reason, "attempt did not complete");
                        self.progress.println(format!(
                            "{} {} for password: {}",
                            "⚠".yellow(),
                            reason.yellow(),
                            candidate
                        ));
                    }
                    session.record(candidate, result)
                }
                Err(err) => {
                    warn!(attempt = index + 1, error = %err, "endpoint unreachable");
                    session.abort(err.to_string())
                }
            };

            self.progress.inc(1);

            if state.is_terminal() {
                break;
            }

            if index + 1 < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        let report = session.finish();
        info!(
            state = %report.state,
            attempts = report.attempts,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "session finished"
        );

        report
    }
}

const VERBOSE_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";
const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

pub fn create_progress_bar(total: usize, verbose: bool) -> ProgressBar {
    let template = if verbose { VERBOSE_TEMPLATE } else { TEMPLATE };
    let style = ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    ProgressBar::new(total as u64).with_style(style)
}
