use serde_json::Value;

use crate::models::AttemptResult;

pub const RATE_LIMITED: u16 = 429;
pub const OK: u16 = 200;

pub struct StatusClassifier;

impl StatusClassifier {
    /// Maps a completed response to a verdict.
    ///
    /// Only a 200 whose body is a JSON object carrying a `token` field counts as
    /// a hit. Any body that fails to parse is a plain failure.
    pub fn classify(status: u16, body: &[u8]) -> AttemptResult {
        match status {
            RATE_LIMITED => AttemptResult::RateLimited,
            OK => match Self::extract_token(body) {
                Some(token) => AttemptResult::Success(token),
                None => AttemptResult::Failure,
            },
            _ => AttemptResult::Failure,
        }
    }

    fn extract_token(body: &[u8]) -> Option<String> {
        let value: Value = serde_json::from_slice(body).ok()?;
        match value.as_object()?.get("token")? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
