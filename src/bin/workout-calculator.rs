// ABOUTME: Workout calculator CLI - prints one summary line per workout sensor package
// ABOUTME: Reads packages from a JSON file or uses the bundled samples, honoring the batch policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the bundled sample packages
//! workout-calculator
//!
//! # Summarize packages from a file, as JSON lines
//! workout-calculator --input packages.json --format json
//!
//! # Stop at the first malformed record
//! workout-calculator --input packages.json --fail-fast
//! ```
//!
//! Input file shape:
//! ```json
//! [{ "workout_type": "RUN", "data": [15000, 1, 75] }]
//! ```
//!
//! Exit codes: `0` every record summarized, `1` at least one record rejected,
//! `2` the input or configuration could not be loaded.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use workout_calculator::batch::{load_packages, process_batch, sample_packages, BatchPolicy};
use workout_calculator::config::CalculatorConfig;
use workout_calculator::logging::LoggingConfig;
use workout_core::errors::{AppError, AppResult};
use workout_core::formatters::{format_summary, OutputFormat};

/// Every record was summarized
const EXIT_OK: u8 = 0;
/// At least one record was rejected
const EXIT_RECORD_ERROR: u8 = 1;
/// Input or configuration could not be loaded
const EXIT_SETUP_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "workout-calculator",
    about = "Compute distance, mean speed and calories for workout sensor packages",
    long_about = "Reads (type code, raw values) packages for SWM, RUN and WLK workouts and prints one summary line per package in input order."
)]
struct Cli {
    /// JSON file with an array of {"workout_type": "...", "data": [...]} packages
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output format: text or json (overrides WORKOUT_OUTPUT_FORMAT)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Abort on the first malformed record instead of skipping it
    #[arg(long)]
    fail_fast: bool,

    /// Minimum batch size processed in parallel (overrides WORKOUT_PARALLEL_THRESHOLD)
    #[arg(long)]
    parallel_threshold: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging unavailable: {e}");
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e}");
            if e.code.is_record_error() {
                ExitCode::from(EXIT_RECORD_ERROR)
            } else {
                ExitCode::from(EXIT_SETUP_ERROR)
            }
        }
    }
}

fn run(cli: &Cli) -> AppResult<u8> {
    let mut config = CalculatorConfig::from_env()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if let Some(threshold) = cli.parallel_threshold {
        config.batch.parallel_threshold = threshold;
    }
    if cli.fail_fast {
        config.batch.policy = BatchPolicy::AbortOnError;
    }

    let packages = match &cli.input {
        Some(path) => load_packages(path)?,
        None => sample_packages(),
    };
    if packages.is_empty() {
        warn!("No workout packages to process");
    }

    let report = match process_batch(&packages, &config.batch) {
        Ok(report) => report,
        Err(e) => {
            if let Some(index) = e.record_index() {
                print_record_error(index, &e);
                return Ok(EXIT_RECORD_ERROR);
            }
            return Err(e);
        }
    };

    let exit_code = if report.is_success() {
        EXIT_OK
    } else {
        EXIT_RECORD_ERROR
    };
    for outcome in report.into_outcomes() {
        match outcome.result {
            Ok(summary) => println!("{}", format_summary(&summary, config.output_format)?.data),
            Err(e) => print_record_error(outcome.index, &e),
        }
    }

    Ok(exit_code)
}

/// One stderr line per rejected record, numbered from 1
fn print_record_error(index: usize, error: &AppError) {
    eprintln!("error: record {} ({}): {}", index + 1, error.code, error.message);
}
