use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use credprobe::cli::{self, Cli};
use credprobe::scanner::create_progress_bar;
use credprobe::{
    AttemptRunner, ConsoleReporter, HttpEndpoint, RunOutcome, WordlistSource, telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init_logging(cli.log_format, cli.verbose) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            ConsoleReporter::new().print_error(&format!("{:#}", e));
            RunOutcome::Internal.into()
        }
    }
}

async fn run(cli: Cli) -> Result<RunOutcome> {
    let reporter = ConsoleReporter::new();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            reporter.print_error(&e.to_string());
            return Ok(RunOutcome::InvalidConfig);
        }
    };

    reporter.print_banner(&config);

    let confirmed = cli::confirm_permission(&mut io::stdin().lock(), &mut io::stdout())
        .context("Failed to read confirmation")?;
    if !confirmed {
        reporter.print_aborted();
        return Ok(RunOutcome::Declined);
    }

    let candidates = match WordlistSource::new(&config.wordlist).load() {
        Ok(candidates) => candidates,
        Err(e) => {
            reporter.print_error(&e.to_string());
            return Ok(RunOutcome::WordlistUnavailable);
        }
    };
    reporter.print_loaded(candidates.len());

    let endpoint = HttpEndpoint::new(&config.url, &config.account, config.timeout)
        .context("Failed to set up the authentication endpoint")?;

    let pb = create_progress_bar(candidates.len(), cli.verbose);
    let runner = AttemptRunner::new(endpoint, config.delay).with_progress(pb.clone());
    let report = runner.run(&candidates).await;
    pb.finish_and_clear();

    reporter.print_outcome(&report, &config);
    reporter.print_summary(&report);

    Ok(RunOutcome::from(report.state))
}
