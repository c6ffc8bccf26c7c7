// ABOUTME: Sports walking calorie formula based on body weight, height, and mean speed
// ABOUTME: Keeps the floor division of squared speed by height from the reference formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::constants::units::MIN_IN_HOUR;
use workout_core::constants::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use workout_core::errors::AppResult;
use workout_core::models::WorkoutType;

use super::{ensure_positive, CalorieFormula, SessionMetrics};

/// Sports walking workout
///
/// Formula: `(0.035 x weight + (speed² // height) x 0.029 x weight) x duration_min`
///
/// `//` is floor division. With realistic speeds (km/h) and heights (cm) the
/// quotient is below one, so the speed term floors to zero and calories
/// depend on weight and duration alone. The floor is part of the reference
/// formula and is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    session: SessionMetrics,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking workout
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `height_cm` is not a finite,
    /// strictly positive number
    pub fn new(session: SessionMetrics, height_cm: f64) -> AppResult<Self> {
        Ok(Self {
            session,
            height_cm: ensure_positive("height_cm", height_cm)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl CalorieFormula for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn session(&self) -> &SessionMetrics {
        &self.session
    }

    fn spent_calories_kcal(&self) -> f64 {
        let weight = self.session.weight_kg();
        let speed = self.mean_speed_kmh();
        let speed_term = floor_div(speed * speed, self.height_cm);
        let duration_min = self.session.duration_hours() * MIN_IN_HOUR;

        (speed_term * SPEED_HEIGHT_MULTIPLIER).mul_add(weight, WEIGHT_MULTIPLIER * weight)
            * duration_min
    }
}

/// Floor division on floats
///
/// Computes `floor(numerator / denominator)` through the remainder, so a
/// quotient that rounds up onto an integer (`1.0 / 0.1 == 10.0`) still floors
/// to the value below it. `denominator` must be non-zero.
fn floor_div(numerator: f64, denominator: f64) -> f64 {
    let remainder = numerator % denominator;
    let mut quotient = (numerator - remainder) / denominator;
    if remainder.abs() > 0.0 && (remainder < 0.0) != (denominator < 0.0) {
        quotient -= 1.0;
    }

    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
