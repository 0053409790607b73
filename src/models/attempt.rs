use std::fmt;

/// One password guess taken from the wordlist.
///
/// Candidates are opaque: they are sent exactly as read (after trimming) and
/// are never deduplicated or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Returns `None` for an empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Verdict for a single authentication request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// 200 with a `token` field in the JSON body.
    Success(String),
    /// Anything that is neither a token nor a rate limit.
    Failure,
    /// 429 from the endpoint.
    RateLimited,
    /// The request did not complete, e.g. it timed out. Carries the reason.
    TransientError(String),
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptResult::Success(_) => write!(f, "success"),
            AttemptResult::Failure => write!(f, "failure"),
            AttemptResult::RateLimited => write!(f, "rate-limited"),
            AttemptResult::TransientError(reason) => write!(f, "transient error ({})", reason),
        }
    }
}
