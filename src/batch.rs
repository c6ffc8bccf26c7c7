// ABOUTME: Batch driver computing summaries for independent workout packages
// ABOUTME: Preserves input order, applies the skip-or-abort policy, and parallelizes large batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Batch Processing
//!
//! Packages share no state, so each one is read and summarized on its own.
//! Batches at or above [`BatchOptions::parallel_threshold`] are spread across
//! the rayon thread pool; outcomes always come back in input order.

use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::ComputedSummary;

use crate::factory::{read_package, WorkoutPackage};
use crate::formulas::CalorieFormula;

/// Batches with at least this many records are processed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// What a batch run does when a record is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Record the error and keep processing the remaining records
    #[default]
    SkipInvalid,
    /// Stop and return the first error (lowest record index)
    AbortOnError,
}

/// Options controlling a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Error policy
    pub policy: BatchPolicy,
    /// Minimum number of records before work is split across threads
    pub parallel_threshold: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            policy: BatchPolicy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Result of processing one record
#[derive(Debug)]
pub struct RecordOutcome {
    /// Zero-based position of the record in the input
    pub index: usize,
    /// Computed summary, or the error that rejected the record
    pub result: AppResult<ComputedSummary>,
}

/// Ordered outcomes of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    /// Outcomes in input order
    #[must_use]
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Consume the report, yielding outcomes in input order
    #[must_use]
    pub fn into_outcomes(self) -> Vec<RecordOutcome> {
        self.outcomes
    }

    /// Number of records that produced a summary
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok()).count()
    }

    /// Number of records that were rejected
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every record produced a summary
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Successful summaries in input order
    pub fn summaries(&self) -> impl Iterator<Item = &ComputedSummary> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
    }
}

/// Read and summarize a single package
///
/// # Errors
///
/// Returns any error raised while reading the package (see [`read_package`])
pub fn summarize_package(package: &WorkoutPackage) -> AppResult<ComputedSummary> {
    read_package(package).map(|workout| workout.summary())
}

/// Process every package and collect the outcomes in input order
///
/// # Errors
///
/// With [`BatchPolicy::AbortOnError`], returns the error of the first
/// (lowest index) failing record, tagged with that index (see
/// [`AppError::record_index`]). With [`BatchPolicy::SkipInvalid`] this
/// never fails; rejected records are reported in the [`BatchReport`].
pub fn process_batch(packages: &[WorkoutPackage], options: &BatchOptions) -> AppResult<BatchReport> {
    let parallel = packages.len() >= options.parallel_threshold.max(1);

    let mut outcomes: Vec<RecordOutcome> = if parallel {
        packages
            .par_iter()
            .enumerate()
            .map(|(index, package)| RecordOutcome {
                index,
                result: summarize_package(package),
            })
            .collect()
    } else {
        let mut outcomes = Vec::with_capacity(packages.len());
        for (index, package) in packages.iter().enumerate() {
            let result = summarize_package(package);
            let abort = result.is_err() && options.policy == BatchPolicy::AbortOnError;
            outcomes.push(RecordOutcome { index, result });
            if abort {
                break;
            }
        }
        outcomes
    };

    if options.policy == BatchPolicy::AbortOnError {
        if let Some(position) = outcomes.iter().position(|outcome| outcome.result.is_err()) {
            let outcome = outcomes.swap_remove(position);
            if let Err(error) = outcome.result {
                warn!(
                    record = outcome.index,
                    code = %error.code,
                    "Aborting batch on malformed record"
                );
                return Err(error.with_record_index(outcome.index));
            }
        }
    }

    let report = BatchReport { outcomes };

    for outcome in report.outcomes() {
        if let Err(error) = &outcome.result {
            warn!(
                record = outcome.index,
                code = %error.code,
                error = %error.message,
                "Skipping malformed workout record"
            );
        }
    }

    info!(
        records = report.outcomes().len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        parallel,
        "Workout batch processed"
    );
    Ok(report)
}

/// Sensor packages bundled with the calculator for demonstration runs
#[must_use]
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", &[15_000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a JSON file holding an array of `{workout_type, data}` objects
///
/// # Errors
///
/// - `StorageError` if the file cannot be read
/// - `SerializationError` if the content is not an array of packages
pub fn load_packages(path: &Path) -> AppResult<Vec<WorkoutPackage>> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let packages: Vec<WorkoutPackage> = serde_json::from_str(&content)?;
    info!(path = %path.display(), records = packages.len(), "Loaded workout packages");
    Ok(packages)
}
