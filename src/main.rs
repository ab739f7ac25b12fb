use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rule_fizzbuzz::fizzbuzz::{fixture, fizz_buzz_range, render};
use rule_fizzbuzz::{FizzBuzzConfig, FizzBuzzError};

/// Print the FizzBuzz sequence, one value per line.
#[derive(Debug, Parser)]
#[command(name = "fizzbuzz", version, about)]
struct Cli {
    /// First value (inclusive).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i64,

    /// Last value (inclusive).
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    end: i64,

    /// Compare against an expected-output file instead of printing.
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "fizzbuzz=debug,rule_fizzbuzz=debug"
    } else {
        "fizzbuzz=info,rule_fizzbuzz=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false).without_time())
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FizzBuzzConfig::default().with_range(cli.start, cli.end);
    let values = fizz_buzz_range(&config)?;

    match &cli.check {
        Some(path) => {
            let expected = fixture::load_expected(path)?;
            fixture::verify(&values, &expected)?;
            info!(path = %path.display(), lines = values.len(), "output matches fixture");
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", render(&values))?;
        }
    }

    Ok(())
}

/// Errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    FizzBuzz(#[from] FizzBuzzError),

    #[error("failed to write output: {0}")]
    Stdout(#[from] io::Error),
}
