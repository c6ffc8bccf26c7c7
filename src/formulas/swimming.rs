// ABOUTME: Swimming calorie formula with pool-based mean speed
// ABOUTME: Distance uses stroke length while speed uses pool length times lengths swum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::constants::step_length::STROKE_M;
use workout_core::constants::swimming::{SPEED_SHIFT, WEIGHT_MULTIPLIER};
use workout_core::constants::units::M_IN_KM;
use workout_core::errors::AppResult;
use workout_core::models::WorkoutType;

use super::{ensure_positive, CalorieFormula, SessionMetrics};

/// Pool swimming workout
///
/// Mean speed ignores the stroke count: `pool_length x pool_lengths / 1000 / duration`.
///
/// Formula: `(speed + 1.1) x 2 x weight`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    session: SessionMetrics,
    pool_length_m: f64,
    pool_lengths_count: u32,
}

impl Swimming {
    /// Create a swimming workout
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `pool_length_m` is not a finite,
    /// strictly positive number
    pub fn new(
        session: SessionMetrics,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> AppResult<Self> {
        Ok(Self {
            session,
            pool_length_m: ensure_positive("pool_length_m", pool_length_m)?,
            pool_lengths_count,
        })
    }

    /// Length of the pool in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_lengths_count(&self) -> u32 {
        self.pool_lengths_count
    }
}

impl CalorieFormula for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn session(&self) -> &SessionMetrics {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_count)
            / M_IN_KM
            / self.session.duration_hours()
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.session.weight_kg()
    }
}
