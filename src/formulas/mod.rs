// ABOUTME: Calorie formula abstraction with one implementation per workout type
// ABOUTME: Provides the CalorieFormula trait, shared session metrics, and enum dispatch over variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Formula Module
//!
//! Every workout type computes the same three metrics (distance, mean speed,
//! calories) from the same shared session readings plus a few type-specific
//! fields. The shared part lives in [`CalorieFormula`] as provided methods;
//! each variant overrides only what differs.
//!
//! # Design
//!
//! - [`Running`], [`SportsWalking`] and [`Swimming`] each implement
//!   [`CalorieFormula`] and can be used on their own.
//! - [`Workout`] is the closed set of variants, selected once by the factory
//!   and dispatched with a `match` (no vtable, no boxing).
//!
//! # Example
//!
//! ```rust
//! use workout_calculator::formulas::{CalorieFormula, Running, SessionMetrics};
//!
//! let session = SessionMetrics::new(15_000, 1.0, 75.0)?;
//! let summary = Running::new(session).summary();
//! assert!((summary.calories_kcal() - 699.75).abs() < 1e-9);
//! # Ok::<(), workout_core::errors::AppError>(())
//! ```

/// Running: speed-based calories
pub mod running;
/// Pool swimming: pool-based speed and stroke length
pub mod swimming;
/// Sports walking: speed and height based calories
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::Serialize;
use workout_core::constants::step_length::STEP_M;
use workout_core::constants::units::M_IN_KM;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{ComputedSummary, WorkoutType};

/// Readings shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionMetrics {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl SessionMetrics {
    /// Create validated session readings
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `duration_hours` or `weight_kg` is
    /// not a finite, strictly positive number
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            action_count,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg: ensure_positive("weight_kg", weight_kg)?,
        })
    }

    /// Counted actions (steps or strokes)
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Workout duration in hours, always strictly positive
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Metrics contract implemented by every workout type
pub trait CalorieFormula {
    /// Workout type this formula computes
    fn workout_type(&self) -> WorkoutType;

    /// Shared session readings
    fn session(&self) -> &SessionMetrics;

    /// Distance covered per counted action, in meters
    fn step_length_m(&self) -> f64 {
        STEP_M
    }

    /// Distance in kilometers: `action_count * step_length / 1000`
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action_count()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole duration, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours()
    }

    /// Calories burned, in kcal
    fn spent_calories_kcal(&self) -> f64;

    /// Compute every metric once and freeze them into a summary
    fn summary(&self) -> ComputedSummary {
        ComputedSummary::new(
            self.workout_type(),
            self.session().duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories_kcal(),
        )
    }
}

/// A validated workout, one variant per supported workout type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "workout_type")]
pub enum Workout {
    /// Pool swimming
    #[serde(rename = "SWM")]
    Swimming(Swimming),
    /// Running
    #[serde(rename = "RUN")]
    Running(Running),
    /// Sports walking
    #[serde(rename = "WLK")]
    SportsWalking(SportsWalking),
}

impl CalorieFormula for Workout {
    fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Swimming(workout) => workout.workout_type(),
            Self::Running(workout) => workout.workout_type(),
            Self::SportsWalking(workout) => workout.workout_type(),
        }
    }

    fn session(&self) -> &SessionMetrics {
        match self {
            Self::Swimming(workout) => workout.session(),
            Self::Running(workout) => workout.session(),
            Self::SportsWalking(workout) => workout.session(),
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Self::Swimming(workout) => workout.step_length_m(),
            Self::Running(workout) => workout.step_length_m(),
            Self::SportsWalking(workout) => workout.step_length_m(),
        }
    }

    fn distance_km(&self) -> f64 {
        match self {
            Self::Swimming(workout) => workout.distance_km(),
            Self::Running(workout) => workout.distance_km(),
            Self::SportsWalking(workout) => workout.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(workout) => workout.mean_speed_kmh(),
            Self::Running(workout) => workout.mean_speed_kmh(),
            Self::SportsWalking(workout) => workout.mean_speed_kmh(),
        }
    }

    fn spent_calories_kcal(&self) -> f64 {
        match self {
            Self::Swimming(workout) => workout.spent_calories_kcal(),
            Self::Running(workout) => workout.spent_calories_kcal(),
            Self::SportsWalking(workout) => workout.spent_calories_kcal(),
        }
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}

/// Reject workouts whose derived metrics overflow to infinity or `NaN`
///
/// Inputs can each be in range while their combination is not, e.g. a
/// duration so small the mean speed divides to infinity.
pub(crate) fn ensure_finite_metrics(workout: &impl CalorieFormula) -> AppResult<()> {
    let summary = workout.summary();
    let metrics = [
        ("distance_km", summary.distance_km()),
        ("mean_speed_kmh", summary.mean_speed_kmh()),
        ("calories_kcal", summary.calories_kcal()),
    ];

    metrics
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(metric, value)| {
            Err(AppError::invalid_input(format!(
                "{metric} evaluates to {value}; the readings are out of range"
            ))
            .with_details(serde_json::json!({ "metric": metric })))
        })
}

/// Reject non-finite and non-positive readings
pub(crate) fn ensure_positive(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::invalid_field(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(AppError::invalid_field(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}
