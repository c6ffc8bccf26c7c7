// ABOUTME: Unified error handling for workout construction, calculation, and rendering
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure a caller can observe is an [`AppError`] carrying a stable
//! [`ErrorCode`]. Callers branch on the code, never on message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Workout records (3000-3999)
    /// Type code is not one of the supported workout codes
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 3000,
    /// Raw value list does not match the variant's positional arity
    #[serde(rename = "INVALID_ARGUMENT_COUNT")]
    InvalidArgumentCount = 3001,
    /// A field is missing, non-numeric, or outside its valid range
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3002,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed or is out of range
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading workout input from storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "Unknown workout type",
            Self::InvalidArgumentCount => "Invalid argument count",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Stable machine-readable name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "UNKNOWN_WORKOUT_TYPE",
            Self::InvalidArgumentCount => "INVALID_ARGUMENT_COUNT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the error describes a malformed workout record
    #[must_use]
    pub const fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownWorkoutType | Self::InvalidArgumentCount | Self::InvalidInput
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the calculator
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (offending field, expected arity, ...)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Type code is not one of SWM, RUN, WLK
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("'{code}' is not a supported workout type code"),
        )
        .with_details(serde_json::json!({ "workout_type": code }))
    }

    /// Raw value list length does not match the variant arity
    #[must_use]
    pub fn invalid_argument_count(workout_type: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::InvalidArgumentCount,
            format!("{workout_type} expects {expected} values, got {actual}"),
        )
        .with_details(serde_json::json!({
            "workout_type": workout_type,
            "expected": expected,
            "actual": actual,
        }))
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid input tied to a named field
    #[must_use]
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(ErrorCode::InvalidInput, format!("{field} {reason}"))
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Tag the error with the zero-based position of the record that raised it
    #[must_use]
    pub fn with_record_index(mut self, index: usize) -> Self {
        if !self.details.is_object() {
            let previous = self.details.take();
            self.details = if previous.is_null() {
                serde_json::json!({})
            } else {
                serde_json::json!({ "context": previous })
            };
        }
        if let Some(map) = self.details.as_object_mut() {
            map.insert("record_index".to_owned(), serde_json::json!(index));
        }
        self
    }

    /// Zero-based record position, when the error came from a batch record
    #[must_use]
    pub fn record_index(&self) -> Option<usize> {
        self.details
            .get("record_index")
            .and_then(serde_json::Value::as_u64)
            .and_then(|index| usize::try_from(index).ok())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
