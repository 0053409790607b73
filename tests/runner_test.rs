use std::cell::RefCell;
use std::time::Duration;

use credprobe::{
    AttemptResult, AttemptRunner, AuthEndpoint, Candidate, EndpointError, SessionState,
    StatusClassifier,
};

#[derive(Clone)]
enum Reply {
    Status(u16, &'static str),
    Timeout,
    Refused,
}

/// Answers each request from a fixed script and remembers what it was sent.
struct ScriptedEndpoint {
    script: Box<dyn Fn(usize, &str) -> Reply>,
    sent: RefCell<Vec<String>>,
}

impl ScriptedEndpoint {
    fn new(script: impl Fn(usize, &str) -> Reply + 'static) -> Self {
        Self {
            script: Box::new(script),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl AuthEndpoint for ScriptedEndpoint {
    async fn attempt(&self, candidate: &Candidate) -> Result<AttemptResult, EndpointError> {
        let index = self.sent.borrow().len();
        self.sent.borrow_mut().push(candidate.to_string());

        match (self.script)(index, candidate.as_str()) {
            Reply::Status(status, body) => Ok(StatusClassifier::classify(status, body.as_bytes())),
            Reply::Timeout => Ok(AttemptResult::TransientError("request timeout".to_string())),
            Reply::Refused => Err(EndpointError::Unreachable {
                url: "http://127.0.0.1:9/api/auth".to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

fn candidates(words: &[&str]) -> Vec<Candidate> {
    words.iter().map(|w| Candidate::new(*w).unwrap()).collect()
}

fn numbered(n: usize) -> Vec<Candidate> {
    (0..n).map(|i| Candidate::new(format!("pw{}", i)).unwrap()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_example_wordlist_finds_third_password() {
    let endpoint = ScriptedEndpoint::new(|_, password| match password {
        "letmein" => Reply::Status(200, r#"{"token":"xyz"}"#),
        _ => Reply::Status(401, r#"{"error":"invalid credentials"}"#),
    });
    let runner = AttemptRunner::new(endpoint, Duration::from_millis(100));

    let report = runner.run(&candidates(&["123456", "password", "letmein"])).await;

    assert_eq!(report.state, SessionState::Succeeded);
    assert_eq!(report.attempts, 3);
    assert_eq!(report.discovered, Candidate::new("letmein"));
    assert_eq!(report.token.as_deref(), Some("xyz"));
    assert_eq!(runner.endpoint().sent(), vec!["123456", "password", "letmein"]);
}

#[tokio::test(start_paused = true)]
async fn test_success_stops_at_first_hit() {
    for k in 1..=5 {
        let endpoint = ScriptedEndpoint::new(move |i, _| {
            if i + 1 == k {
                Reply::Status(200, r#"{"token":"abc"}"#)
            } else {
                Reply::Status(401, "")
            }
        });
        let runner = AttemptRunner::new(endpoint, Duration::ZERO);
        let words = numbered(5);

        let report = runner.run(&words).await;

        assert_eq!(report.state, SessionState::Succeeded, "k = {}", k);
        assert_eq!(report.attempts, k);
        assert_eq!(report.discovered.as_ref(), Some(&words[k - 1]));
        assert_eq!(runner.endpoint().sent().len(), k);
    }
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_defends_and_stops() {
    for k in 1..=4 {
        let endpoint = ScriptedEndpoint::new(move |i, _| {
            if i + 1 == k {
                Reply::Status(429, "Too Many Requests")
            } else {
                Reply::Status(401, "")
            }
        });
        let runner = AttemptRunner::new(endpoint, Duration::from_millis(50));

        let report = runner.run(&numbered(4)).await;

        assert_eq!(report.state, SessionState::Defended, "k = {}", k);
        assert_eq!(report.attempts, k);
        assert!(report.discovered.is_none());
        assert_eq!(runner.endpoint().sent().len(), k);
    }
}

#[tokio::test(start_paused = true)]
async fn test_all_failures_exhausts_list() {
    let endpoint = ScriptedEndpoint::new(|_, _| Reply::Status(401, ""));
    let runner = AttemptRunner::new(endpoint, Duration::ZERO);

    let report = runner.run(&numbered(7)).await;

    assert_eq!(report.state, SessionState::Exhausted);
    assert_eq!(report.attempts, 7);
    assert!(report.discovered.is_none());
    assert!(report.token.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_ok_without_token_is_not_success() {
    let endpoint = ScriptedEndpoint::new(|i, _| match i {
        0 => Reply::Status(200, r#"{"message":"ok"}"#),
        1 => Reply::Status(200, "not json"),
        _ => Reply::Status(500, ""),
    });
    let runner = AttemptRunner::new(endpoint, Duration::ZERO);

    let report = runner.run(&numbered(3)).await;

    assert_eq!(report.state, SessionState::Exhausted);
    assert_eq!(report.attempts, 3);
}

#[tokio::test(start_paused = true)]
async fn test_connection_failure_aborts() {
    let endpoint = ScriptedEndpoint::new(|i, _| match i {
        0 | 1 => Reply::Status(401, ""),
        _ => Reply::Refused,
    });
    let runner = AttemptRunner::new(endpoint, Duration::from_millis(100));

    let report = runner.run(&numbered(6)).await;

    assert_eq!(report.state, SessionState::Aborted);
    assert_eq!(report.attempts, 3);
    assert_eq!(runner.endpoint().sent().len(), 3);
    assert!(report.abort_reason.unwrap().contains("connection refused"));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_is_counted_and_skipped() {
    let endpoint = ScriptedEndpoint::new(|_, password| match password {
        "slow" => Reply::Timeout,
        "hunter2" => Reply::Status(200, r#"{"token":"t0k3n"}"#),
        _ => Reply::Status(401, ""),
    });
    let runner = AttemptRunner::new(endpoint, Duration::ZERO);

    let report = runner.run(&candidates(&["a", "slow", "b", "hunter2", "c"])).await;

    assert_eq!(report.state, SessionState::Succeeded);
    assert_eq!(report.attempts, 4);
    assert_eq!(report.transient_errors, 1);
    // the timed-out candidate is not retried
    assert_eq!(runner.endpoint().sent(), vec!["a", "slow", "b", "hunter2"]);
}

#[tokio::test(start_paused = true)]
async fn test_duplicates_and_order_preserved() {
    let endpoint = ScriptedEndpoint::new(|_, _| Reply::Status(403, ""));
    let runner = AttemptRunner::new(endpoint, Duration::ZERO);

    runner.run(&candidates(&["z", "a", "z", "m"])).await;

    assert_eq!(runner.endpoint().sent(), vec!["z", "a", "z", "m"]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_only_between_attempts() {
    let endpoint = ScriptedEndpoint::new(|_, _| Reply::Status(401, ""));
    let runner = AttemptRunner::new(endpoint, Duration::from_millis(250));

    let report = runner.run(&numbered(4)).await;

    assert_eq!(report.state, SessionState::Exhausted);
    assert_eq!(report.elapsed, Duration::from_millis(750));
    assert!((report.attempts_per_second() - 4.0 / 0.75).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn test_no_delay_after_terminal_outcome() {
    let endpoint = ScriptedEndpoint::new(|i, _| {
        if i == 1 {
            Reply::Status(429, "")
        } else {
            Reply::Status(401, "")
        }
    });
    let runner = AttemptRunner::new(endpoint, Duration::from_secs(1));

    let report = runner.run(&numbered(10)).await;

    assert_eq!(report.state, SessionState::Defended);
    assert_eq!(report.elapsed, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_single_candidate_has_zero_elapsed() {
    let endpoint = ScriptedEndpoint::new(|_, _| Reply::Status(401, ""));
    let runner = AttemptRunner::new(endpoint, Duration::from_secs(5));

    let report = runner.run(&numbered(1)).await;

    assert_eq!(report.attempts, 1);
    assert_eq!(report.elapsed, Duration::ZERO);
    assert_eq!(report.attempts_per_second(), 0.0);
}
