use chrono::Local;
use colored::Colorize;
use tabled::{Table, Tabled, settings::{Alignment, Modify, Style, object::Columns}};

use crate::models::{ProbeConfig, SessionReport, SessionState};

const RULE_WIDTH: usize = 70;
const TOKEN_PREVIEW_CHARS: usize = 50;

pub struct ConsoleReporter;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self, config: &ProbeConfig) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!("{}", "  BRUTE FORCE SECURITY TEST".cyan().bold());
        println!("{}", rule.cyan());
        println!("{}    {}", "Target URL:".yellow(), config.url);
        println!("{}  {}", "Target Email:".yellow(), config.account);
        println!("{}      {}", "Wordlist:".yellow(), config.wordlist.display());
        println!("{}       {}", "Started:".yellow(), Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("{}\n", rule.cyan());
        println!("{}", "⚠️  WARNING: Only use this tool on systems you have permission to test!".red());
        println!("{}\n", "⚠️  Unauthorized access attempts are illegal!".red());
    }

    pub fn print_aborted(&self) {
        println!("{}", "Test aborted.".red());
    }

    pub fn print_loaded(&self, count: usize) {
        println!("{} Loaded {} passwords from wordlist\n", "✓".green(), count);
        println!("{}\n", "Starting brute force test...".cyan());
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗ Error:".red(), message.red());
    }

    /// Prints the verdict block for a finished session.
    pub fn print_outcome(&self, report: &SessionReport, config: &ProbeConfig) {
        match report.state {
            SessionState::Succeeded => {
                let rule = "=".repeat(RULE_WIDTH);
                println!("\n{}", rule.green());
                println!("{}", "  ✓ SUCCESS! Password found!".green().bold());
                println!("{}", rule.green());
                println!("{}     {}", "Email:".green(), config.account);
                if let Some(password) = &report.discovered {
                    println!("{}  {}", "Password:".green(), password);
                }
                if let Some(token) = &report.token {
                    println!("{}     {}...", "Token:".green(), Self::token_preview(token));
                }
                println!("{}\n", rule.green());
            }
            SessionState::Defended => {
                println!(
                    "\n{}",
                    "🛡️  Security Mechanism Triggered: Rate Limit Exceeded (429)".green()
                );
                println!(
                    "{}",
                    "✓ The application successfully detected and blocked the brute force attack."
                        .green()
                );
            }
            SessionState::Aborted => {
                println!("\n{} {}", "✗ Connection Error: Cannot connect to".red(), config.url.red());
                if let Some(reason) = &report.abort_reason {
                    println!("  {}", reason.dimmed());
                }
                println!("{}\n", "  Make sure the server is running!".yellow());
            }
            SessionState::Exhausted | SessionState::Running => {}
        }
    }

    pub fn print_summary(&self, report: &SessionReport) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!("{}", "  TEST SUMMARY".cyan().bold());
        println!("{}", rule.cyan());

        let table = Table::new(Self::summary_rows(report))
            .with(Style::rounded())
            .with(Modify::new(Columns::single(1)).with(Alignment::right()))
            .to_string();
        println!("{}", table);

        match report.state {
            SessionState::Succeeded => {
                let password = report
                    .discovered
                    .as_ref()
                    .map(|c| c.as_str())
                    .unwrap_or_default();
                println!("{} ✓ Password found: {}", "Result:".green(), password);
                println!("\n{}", "SECURITY RECOMMENDATION:".red());
                println!("  • The password '{}' is too weak and easily guessable", password);
                println!("  • Implement rate limiting on the authentication endpoint");
                println!("  • Consider adding CAPTCHA after multiple failed attempts");
                println!("  • Enforce strong password policies");
            }
            SessionState::Defended => {
                println!("{} 🛡️  Rate limiting stopped the test", "Result:".green());
                println!("\n{}", "SECURITY STATUS:".green());
                println!(
                    "  • Rate limiting triggered after {} attempts",
                    report.attempts
                );
                println!("  • Verify the limit also applies across source addresses");
            }
            SessionState::Aborted => {
                println!(
                    "{} ✗ Endpoint unreachable, no conclusion drawn",
                    "Result:".red()
                );
            }
            SessionState::Exhausted | SessionState::Running => {
                println!("{} ✗ Password not found in wordlist", "Result:".yellow());
                println!("\n{}", "SECURITY STATUS:".green());
                println!("  • Password resisted common password dictionary attack");
                println!("  • Continue to monitor for rate limiting effectiveness");
                if report.transient_errors > 0 {
                    println!(
                        "  • {} attempts timed out or failed and prove nothing either way",
                        report.transient_errors
                    );
                }
            }
        }

        println!("{}\n", rule.cyan());
    }

    fn summary_rows(report: &SessionReport) -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                metric: "Total attempts",
                value: report.attempts.to_string(),
            },
            SummaryRow {
                metric: "Time elapsed",
                value: format!("{:.2} seconds", report.elapsed.as_secs_f64()),
            },
            SummaryRow {
                metric: "Attempts per sec",
                value: format!("{:.2}", report.attempts_per_second()),
            },
            SummaryRow {
                metric: "Transient errors",
                value: report.transient_errors.to_string(),
            },
            SummaryRow {
                metric: "Final state",
                value: report.state.to_string(),
            },
        ]
    }

    fn token_preview(token: &str) -> String {
        token.chars().take(TOKEN_PREVIEW_CHARS).collect()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
