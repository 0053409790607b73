pub mod analyzer;
pub mod cli;
pub mod error;
pub mod http;
pub mod models;
pub mod outcome;
pub mod reporter;
pub mod scanner;
pub mod telemetry;

pub use analyzer::StatusClassifier;
pub use error::{ConfigError, EndpointError, WordlistError};
pub use http::{AuthEndpoint, HttpEndpoint};
pub use models::{AttemptResult, Candidate, ProbeConfig, Session, SessionReport, SessionState};
pub use outcome::RunOutcome;
pub use reporter::ConsoleReporter;
pub use scanner::{AttemptRunner, WordlistSource};
