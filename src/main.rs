// ============================================================================
// chudnovsky-pi
// Prints truncated digits of pi computed with the Chudnovsky series
// ============================================================================

use chudnovsky_pi::cli::{parse_digits, render_report, Cli, UsageError, USAGE};
use chudnovsky_pi::prelude::*;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status for argument errors
const EXIT_USAGE: u8 = 1;

/// Exit status for a failed computation
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(err) => {
            let reason = err.kind().as_str().unwrap_or("unrecognized arguments");
            return usage(UsageError::Invalid(reason.to_string()));
        },
    };

    let requested_digits = match parse_digits(cli.digits.as_deref()) {
        Ok(digits) => digits,
        Err(err) => return usage(err),
    };

    let engine = match PiEngineBuilder::new()
        .summation(cli.strategy.into())
        .build(Arc::new(LoggingEventHandler))
    {
        Ok(engine) => engine,
        Err(err) => return failure(err),
    };

    match engine.compute(requested_digits) {
        Ok(computation) => {
            print!("{}", render_report(&computation));
            ExitCode::SUCCESS
        },
        Err(err) => failure(err),
    }
}

fn usage(err: UsageError) -> ExitCode {
    tracing::debug!(error = %err, "Rejected arguments");
    println!("{}", USAGE);
    ExitCode::from(EXIT_USAGE)
}

fn failure(err: PiError) -> ExitCode {
    tracing::error!(error = %err, "Computation failed");
    eprintln!("error: {}", err);
    ExitCode::from(EXIT_FAILURE)
}

/// Log to stderr so stdout carries only the report; `RUST_LOG` overrides the
/// default `warn` level.
#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
