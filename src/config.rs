// ABOUTME: Environment configuration for batch runs of the workout calculator
// ABOUTME: Parses batch policy, parallelism threshold, and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `WORKOUT_BATCH_POLICY` | `skip`, `abort` | `skip` |
//! | `WORKOUT_PARALLEL_THRESHOLD` | non-negative integer | `64` |
//! | `WORKOUT_OUTPUT_FORMAT` | `text`, `json` | `text` |
//!
//! Formula coefficients are compile-time constants and are not configurable.

use std::env;
use thiserror::Error;
use tracing::debug;
use workout_core::errors::AppError;
use workout_core::formatters::OutputFormat;

use crate::batch::{BatchOptions, BatchPolicy, DEFAULT_PARALLEL_THRESHOLD};

/// Environment variable selecting the batch error policy
pub const BATCH_POLICY_VAR: &str = "WORKOUT_BATCH_POLICY";

/// Environment variable setting the minimum batch size for parallel processing
pub const PARALLEL_THRESHOLD_VAR: &str = "WORKOUT_PARALLEL_THRESHOLD";

/// Environment variable selecting the summary output format
pub const OUTPUT_FORMAT_VAR: &str = "WORKOUT_OUTPUT_FORMAT";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds a value outside its accepted set
    #[error("Invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Offending value
        value: String,
        /// Accepted values
        expected: &'static str,
    },

    /// Environment variable is set but not valid unicode
    #[error("Environment variable error for {key}: {source}")]
    EnvVar {
        /// Environment variable name
        key: &'static str,
        /// Underlying error
        #[source]
        source: env::VarError,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Calculator configuration resolved from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorConfig {
    /// Batch processing options
    pub batch: BatchOptions,
    /// Summary output format
    pub output_format: OutputFormat,
}

impl CalculatorConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unsupported value
    pub fn from_env() -> Result<Self, ConfigError> {
        let policy = match optional_var(BATCH_POLICY_VAR)?.as_deref() {
            None => BatchPolicy::default(),
            Some(value) => parse_policy(value)?,
        };

        let parallel_threshold = match optional_var(PARALLEL_THRESHOLD_VAR)? {
            None => DEFAULT_PARALLEL_THRESHOLD,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: PARALLEL_THRESHOLD_VAR,
                    value,
                    expected: "a non-negative integer",
                })?,
        };

        let output_format = match optional_var(OUTPUT_FORMAT_VAR)? {
            None => OutputFormat::default(),
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: OUTPUT_FORMAT_VAR,
                value,
                expected: "'text' or 'json'",
            })?,
        };

        let config = Self {
            batch: BatchOptions {
                policy,
                parallel_threshold,
            },
            output_format,
        };
        debug!(?config, "Calculator configuration loaded");
        Ok(config)
    }
}

fn parse_policy(value: &str) -> Result<BatchPolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "skip" => Ok(BatchPolicy::SkipInvalid),
        "abort" => Ok(BatchPolicy::AbortOnError),
        _ => Err(ConfigError::InvalidValue {
            key: BATCH_POLICY_VAR,
            value: value.to_owned(),
            expected: "'skip' or 'abort'",
        }),
    }
}

/// Read a variable, treating unset and empty as absent
fn optional_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { key, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("skip").unwrap(), BatchPolicy::SkipInvalid);
        assert_eq!(parse_policy(" ABORT ").unwrap(), BatchPolicy::AbortOnError);
        assert!(parse_policy("retry").is_err());
    }

    #[test]
    fn test_config_error_converts_to_config_invalid() {
        let error = AppError::from(ConfigError::InvalidValue {
            key: BATCH_POLICY_VAR,
            value: "retry".into(),
            expected: "'skip' or 'abort'",
        });

        assert_eq!(error.code, workout_core::errors::ErrorCode::ConfigInvalid);
        assert!(error.message.contains("WORKOUT_BATCH_POLICY"));
    }
}
