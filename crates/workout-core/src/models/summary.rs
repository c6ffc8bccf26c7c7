// ABOUTME: Computed workout summary produced once per validated workout record
// ABOUTME: Holds duration, distance, mean speed, and calories ready for rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::WorkoutType;

/// Metrics computed for a single workout
///
/// Built by the calculation layer and never mutated afterwards; the fields are
/// private and exposed through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedSummary {
    workout_type: WorkoutType,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl ComputedSummary {
    /// Assemble a summary from already computed metrics
    #[must_use]
    pub const fn new(
        workout_type: WorkoutType,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            workout_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Workout type the metrics were computed for
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    /// Display label of the workout type
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.workout_type.label()
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned in kcal
    #[must_use]
    pub const fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }
}
