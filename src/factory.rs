// ABOUTME: Workout factory mapping a sensor type code and positional raw values to a workout
// ABOUTME: Validates type code, arity, and every field before any metric is computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Factory
//!
//! Sensor packages arrive as a type code plus an ordered list of numbers whose
//! meaning depends on the code:
//!
//! | Code | Values |
//! |------|--------|
//! | `RUN` | action, duration (h), weight (kg) |
//! | `WLK` | action, duration (h), weight (kg), height (cm) |
//! | `SWM` | action, duration (h), weight (kg), pool length (m), pool count |
//!
//! Construction is pure: a package either yields a [`Workout`] or a typed
//! [`AppError`], never a partial result.

use serde::{Deserialize, Serialize};
use tracing::debug;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutType;

use crate::formulas::{
    ensure_finite_metrics, Running, SessionMetrics, SportsWalking, Swimming, Workout,
};

/// Positional field names shared by every workout type
const SESSION_FIELDS: [&str; 3] = ["action_count", "duration_hours", "weight_kg"];
const WALKING_FIELDS: [&str; 4] = ["action_count", "duration_hours", "weight_kg", "height_cm"];
const SWIMMING_FIELDS: [&str; 5] = [
    "action_count",
    "duration_hours",
    "weight_kg",
    "pool_length_m",
    "pool_lengths_count",
];

/// Names of the positional raw values for a workout type, in order
#[must_use]
pub const fn field_names(workout_type: WorkoutType) -> &'static [&'static str] {
    match workout_type {
        WorkoutType::Running => &SESSION_FIELDS,
        WorkoutType::SportsWalking => &WALKING_FIELDS,
        WorkoutType::Swimming => &SWIMMING_FIELDS,
    }
}

/// Builds validated workouts from raw sensor values
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Build a workout from a type code and its positional raw values
    ///
    /// # Errors
    ///
    /// - `UnknownWorkoutType` if `type_code` is not `SWM`, `RUN` or `WLK`
    /// - `InvalidArgumentCount` if `raw_values` does not match the type's arity
    /// - `InvalidInput` if any value is out of range for its field, or if the
    ///   values combine into a non-finite distance, speed or calorie figure
    ///
    /// # Example
    ///
    /// ```rust
    /// use workout_calculator::factory::WorkoutFactory;
    /// use workout_calculator::formulas::CalorieFormula;
    ///
    /// let workout = WorkoutFactory::build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
    /// assert!((workout.spent_calories_kcal() - 336.0).abs() < 1e-9);
    /// # Ok::<(), workout_core::errors::AppError>(())
    /// ```
    pub fn build(type_code: &str, raw_values: &[f64]) -> AppResult<Workout> {
        let workout_type: WorkoutType = type_code.parse()?;
        Self::build_for(workout_type, raw_values)
    }

    /// Build a workout for an already parsed workout type
    ///
    /// # Errors
    ///
    /// Same as [`WorkoutFactory::build`], minus the type code check
    pub fn build_for(workout_type: WorkoutType, raw_values: &[f64]) -> AppResult<Workout> {
        check_arity(workout_type, raw_values.len())?;

        let session = SessionMetrics::new(
            whole_count("action_count", raw_values[0])?,
            raw_values[1],
            raw_values[2],
        )?;

        let workout = match workout_type {
            WorkoutType::Running => Workout::from(Running::new(session)),
            WorkoutType::SportsWalking => {
                Workout::from(SportsWalking::new(session, raw_values[3])?)
            }
            WorkoutType::Swimming => Workout::from(Swimming::new(
                session,
                raw_values[3],
                whole_count("pool_lengths_count", raw_values[4])?,
            )?),
        };
        ensure_finite_metrics(&workout)?;

        debug!(
            workout_type = workout_type.code(),
            values = raw_values.len(),
            "Built workout from raw values"
        );
        Ok(workout)
    }
}

/// One raw sensor package: a type code plus loosely typed values
///
/// Values stay as JSON until the package is read so a non-numeric entry is
/// reported against its own record instead of failing the whole input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Sensor type code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional raw values
    pub data: Vec<serde_json::Value>,
}

impl WorkoutPackage {
    /// Create a package from numeric values
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.iter().map(|value| serde_json::json!(value)).collect(),
        }
    }
}

/// Read a raw sensor package into a workout
///
/// # Errors
///
/// Returns the same errors as [`WorkoutFactory::build`]; a value that is not a
/// JSON number is an `InvalidInput` naming the offending field.
pub fn read_package(package: &WorkoutPackage) -> AppResult<Workout> {
    let workout_type: WorkoutType = package.workout_type.parse()?;
    check_arity(workout_type, package.data.len())?;

    let raw_values = package
        .data
        .iter()
        .zip(field_names(workout_type))
        .map(|(value, field)| {
            value.as_f64().ok_or_else(|| {
                AppError::invalid_field(field, format!("must be a number, got {value}"))
            })
        })
        .collect::<AppResult<Vec<f64>>>()?;

    WorkoutFactory::build_for(workout_type, &raw_values)
}

fn check_arity(workout_type: WorkoutType, actual: usize) -> AppResult<()> {
    let expected = workout_type.arity();
    if actual == expected {
        Ok(())
    } else {
        Err(AppError::invalid_argument_count(
            workout_type.code(),
            expected,
            actual,
        ))
    }
}

/// Convert a raw count to an integer, rejecting fractions and negatives
fn whole_count(field: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() {
        return Err(AppError::invalid_field(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(AppError::invalid_field(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    if value.fract().abs() > 0.0 {
        return Err(AppError::invalid_field(
            field,
            format!("must be a whole number, got {value}"),
        ));
    }
    if value > f64::from(u32::MAX) {
        return Err(AppError::invalid_field(
            field,
            format!("exceeds the supported maximum of {}", u32::MAX),
        ));
    }
    Ok(value as u32)
}
