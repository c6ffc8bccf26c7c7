// ABOUTME: Shared test utilities for workout calculator integration tests
// ABOUTME: Provides quiet logging setup, reference packages, and float comparison helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `workout_calculator`

use std::sync::Once;
use workout_calculator::factory::WorkoutPackage;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for comparing computed metrics
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Swimming reference package: 720 strokes, 1 h, 80 kg, 25 m pool, 40 lengths
pub fn swimming_package() -> WorkoutPackage {
    WorkoutPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
}

/// Running reference package: 15000 steps, 1 h, 75 kg
pub fn running_package() -> WorkoutPackage {
    WorkoutPackage::new("RUN", &[15_000.0, 1.0, 75.0])
}

/// Sports walking reference package: 9000 steps, 1 h, 75 kg, 180 cm
pub fn walking_package() -> WorkoutPackage {
    WorkoutPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0])
}

/// Package with an unsupported type code
pub fn unknown_package() -> WorkoutPackage {
    WorkoutPackage::new("BIKE", &[1000.0, 1.0, 75.0])
}
