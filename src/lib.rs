// ABOUTME: Main library entry point for the workout calculator
// ABOUTME: Builds workouts from raw sensor packages and computes distance, speed, and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Calculator
//!
//! Derives distance, mean speed, and calories burned from raw sensor readings
//! for swimming, running, and sports walking sessions, and renders a one-line
//! summary per session.
//!
//! ## Architecture
//!
//! - **factory**: type code + positional values -> validated [`formulas::Workout`]
//! - **formulas**: the [`formulas::CalorieFormula`] contract and one implementation per workout type
//! - **batch**: ordered, optionally parallel processing of many packages
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! Shared types (errors, models, constants, formatters) live in `workout-core`.
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_calculator::factory::WorkoutFactory;
//! use workout_calculator::formulas::CalorieFormula;
//! use workout_core::formatters::SummaryFormatter;
//!
//! let workout = WorkoutFactory::build("RUN", &[15000.0, 1.0, 75.0])?;
//! let line = SummaryFormatter::format(&workout.summary());
//! assert!(line.ends_with("Calories burned: 699.750."));
//! # Ok::<(), workout_core::errors::AppError>(())
//! ```

/// Calorie formula contract and per-workout implementations
pub mod formulas;

/// Construction of validated workouts from raw sensor values
pub mod factory;

/// Ordered batch processing of workout packages
pub mod batch;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use workout_core::errors;
pub use workout_core::formatters;
pub use workout_core::models;
