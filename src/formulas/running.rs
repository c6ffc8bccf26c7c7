// ABOUTME: Running calorie formula based on mean speed and body weight
// ABOUTME: Uses step-based distance and the shared mean speed calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::constants::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use workout_core::constants::units::{MIN_IN_HOUR, M_IN_KM};
use workout_core::models::WorkoutType;

use super::{CalorieFormula, SessionMetrics};

/// Running workout
///
/// Formula: `(18 x speed - 20) x weight / 1000 x duration_min`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    session: SessionMetrics,
}

impl Running {
    /// Create a running workout from validated session readings
    #[must_use]
    pub const fn new(session: SessionMetrics) -> Self {
        Self { session }
    }
}

impl CalorieFormula for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn session(&self) -> &SessionMetrics {
        &self.session
    }

    fn spent_calories_kcal(&self) -> f64 {
        let duration_min = self.session.duration_hours() * MIN_IN_HOUR;
        SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), -SPEED_SHIFT) * self.session.weight_kg()
            / M_IN_KM
            * duration_min
    }
}
