// ABOUTME: Unit conversions and per-workout formula coefficients
// ABOUTME: Every number used by the calorie formulas lives here as a named constant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Coefficients are grouped by workout variant so each formula reads its own
//! module and nothing else.

/// Unit conversion factors
pub mod units {
    /// Meters in one kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MIN_IN_HOUR: f64 = 60.0;
}

/// Distance covered per counted action (step or stroke), in meters
pub mod step_length {
    /// Step length shared by running and sports walking
    pub const STEP_M: f64 = 0.65;

    /// Stroke length for swimming
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie coefficients
///
/// `(SPEED_MULTIPLIER * speed - SPEED_SHIFT) * weight / 1000 * duration_min`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Constant subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients
///
/// `(WEIGHT_MULTIPLIER * weight + (speed^2 // height) * SPEED_HEIGHT_MULTIPLIER * weight) * duration_min`
pub mod walking {
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the floored speed-squared over height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
///
/// `(speed + SPEED_SHIFT) * WEIGHT_MULTIPLIER * weight`
pub mod swimming {
    /// Constant added to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Rendering constants
pub mod display {
    /// Decimal places used for every numeric field of a summary
    pub const DECIMAL_PLACES: usize = 3;
}
