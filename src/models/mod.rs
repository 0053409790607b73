mod attempt;
mod config;
mod session;

pub use attempt::{AttemptResult, Candidate};
pub use config::{
    DEFAULT_DELAY_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_WORDLIST, ProbeConfig,
};
pub use session::{Session, SessionReport, SessionState};
