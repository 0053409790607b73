use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_URL: &str = "http://localhost:3000/api/auth";
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";
pub const DEFAULT_DELAY_SECS: f64 = 0.1;
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

/// Validated settings for one test run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub url: String,
    pub account: String,
    pub wordlist: PathBuf,
    pub delay: Duration,
    pub timeout: Duration,
}

impl ProbeConfig {
    pub fn new(
        url: &str,
        account: &str,
        wordlist: PathBuf,
        delay_secs: f64,
        timeout_secs: f64,
    ) -> Result<Self, ConfigError> {
        let account = account.trim();
        if account.is_empty() {
            return Err(ConfigError::MissingAccount);
        }

        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let delay = Duration::try_from_secs_f64(delay_secs)
            .map_err(|_| ConfigError::InvalidDelay(delay_secs))?;

        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or(ConfigError::InvalidTimeout(timeout_secs))?;

        Ok(Self {
            url: url.to_string(),
            account: account.to_string(),
            wordlist,
            delay,
            timeout,
        })
    }
}
