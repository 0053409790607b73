use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("Wordlist file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error loading wordlist {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Wordlist {} contains no passwords", .0.display())]
    Empty(PathBuf),
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Cannot connect to {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Delay must be a non-negative number of seconds, got {0}")]
    InvalidDelay(f64),

    #[error("Timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),

    #[error("Invalid target URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Target account identifier must not be empty")]
    MissingAccount,
}
