// ABOUTME: Summary rendering for computed workout metrics
// ABOUTME: Supports the human-readable one-line message (default) and JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! A [`ComputedSummary`] is rendered either as the classic one-line message
//! or as a single-line JSON object for downstream tooling. Both render every
//! numeric field with exactly three decimal places and `.` as the separator,
//! independent of the host locale.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_core::formatters::{format_summary, OutputFormat};
//!
//! let output = format_summary(&summary, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use serde::Serialize;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use crate::constants::display::DECIMAL_PLACES;
use crate::errors::{AppError, AppResult};
use crate::models::ComputedSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One-line human readable message (default)
    #[default]
    Text,
    /// One JSON object per summary
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered summary, always a single line
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Renders the one-line summary message
///
/// `Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.`
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Render a summary as the human readable one-line message
    #[must_use]
    pub fn format(summary: &ComputedSummary) -> String {
        format!(
            "Workout type: {label}; \
             Duration: {duration:.prec$} h; \
             Distance: {distance:.prec$} km; \
             Mean speed: {speed:.prec$} km/h; \
             Calories burned: {calories:.prec$}.",
            label = summary.label(),
            duration = summary.duration_hours(),
            distance = summary.distance_km(),
            speed = summary.mean_speed_kmh(),
            calories = summary.calories_kcal(),
            prec = DECIMAL_PLACES,
        )
    }
}

/// JSON shape of a rendered summary, with fields rounded for display
#[derive(Debug, Serialize)]
struct RenderedSummary<'a> {
    workout_type: &'a str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl<'a> RenderedSummary<'a> {
    fn from_summary(summary: &'a ComputedSummary) -> AppResult<Self> {
        Ok(Self {
            workout_type: summary.label(),
            duration_hours: round_for_display(summary.duration_hours())?,
            distance_km: round_for_display(summary.distance_km())?,
            mean_speed_kmh: round_for_display(summary.mean_speed_kmh())?,
            calories_kcal: round_for_display(summary.calories_kcal())?,
        })
    }
}

/// Round through the same fixed-precision rendering the text line uses
fn round_for_display(value: f64) -> AppResult<f64> {
    format!("{value:.prec$}", prec = DECIMAL_PLACES)
        .parse()
        .map_err(|e: ParseFloatError| {
            AppError::serialization(format!("cannot render {value} for display")).with_source(e)
        })
}

/// Render a summary in the requested output format
///
/// # Errors
///
/// Returns `AppError` with `SerializationError` if JSON serialization fails
pub fn format_summary(summary: &ComputedSummary, format: OutputFormat) -> AppResult<FormattedOutput> {
    let data = match format {
        OutputFormat::Text => SummaryFormatter::format(summary),
        OutputFormat::Json => serde_json::to_string(&RenderedSummary::from_summary(summary)?)
            .map_err(|e| {
                tracing::warn!(error = %e, "Summary JSON serialization failed");
                AppError::from(e)
            })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutType;

    fn swimming_summary() -> ComputedSummary {
        ComputedSummary::new(WorkoutType::Swimming, 1.0, 0.9936, 1.0, 336.0)
    }

    #[test]
    fn test_text_format_pads_three_decimals() {
        let line = SummaryFormatter::format(&swimming_summary());
        assert_eq!(
            line,
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_json_format_is_single_line() {
        let output = format_summary(&swimming_summary(), OutputFormat::Json).unwrap();

        assert_eq!(output.content_type, "application/json");
        assert!(!output.data.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
        assert_eq!(value["workout_type"], "Swimming");
        assert!((value["distance_km"].as_f64().unwrap() - 0.994).abs() < 1e-12);
        assert!((value["calories_kcal"].as_f64().unwrap() - 336.0).abs() < 1e-12);
    }

    #[test]
    fn test_json_rounding_agrees_with_text_line() {
        for value in [1.0005, 2.0015, 0.9995, 699.7495, 1234.5675] {
            let summary = ComputedSummary::new(WorkoutType::Running, value, value, value, value);
            let text = format!("{value:.3}");
            let json = format_summary(&summary, OutputFormat::Json).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&json.data).unwrap();

            assert_eq!(
                parsed["duration_hours"].as_f64().unwrap(),
                text.parse::<f64>().unwrap(),
                "value {value}"
            );
        }
    }

    #[test]
    fn test_json_keeps_very_large_values() {
        let summary = ComputedSummary::new(WorkoutType::Running, 1.0, 1.0, 1.0, 1e306);
        let output = format_summary(&summary, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();

        let calories = value["calories_kcal"].as_f64().unwrap();
        assert!(calories.is_finite());
        assert!((calories / 1e306 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
