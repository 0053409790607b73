use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::error::ConfigError;
use crate::models::{
    DEFAULT_DELAY_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_WORDLIST, ProbeConfig,
};
use crate::telemetry::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "credprobe")]
#[command(version, about = "Brute force resistance tester for authentication endpoints")]
#[command(after_help = "Examples:
  credprobe --email admin@example.com
  credprobe --email user@test.com --url http://localhost:3000/api/auth
  credprobe --email test@test.com --wordlist custom_wordlist.txt --delay 0.5

Only use this tool on systems you have permission to test.")]
pub struct Cli {
    /// Target account identifier sent as `email`
    #[arg(short, long)]
    pub email: String,

    /// Authentication endpoint URL
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Path to the password wordlist
    #[arg(short, long, default_value = DEFAULT_WORDLIST)]
    pub wordlist: PathBuf,

    /// Delay between attempts in seconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_SECS, allow_negative_numbers = true)]
    pub delay: f64,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn to_config(&self) -> Result<ProbeConfig, ConfigError> {
        ProbeConfig::new(
            &self.url,
            &self.email,
            self.wordlist.clone(),
            self.delay,
            self.timeout,
        )
    }
}

pub const CONSENT_PROMPT: &str = "Do you have permission to test this system? (yes/no): ";

/// Asks the operator for permission. EOF counts as a refusal.
pub fn confirm_permission<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{}", CONSENT_PROMPT.yellow())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
