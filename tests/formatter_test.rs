// ABOUTME: Integration tests for summary rendering of computed workouts
// ABOUTME: Checks the one-line message layout, fixed three-decimal output, and JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_calculator::factory::WorkoutFactory;
use workout_calculator::formulas::CalorieFormula;
use workout_core::formatters::{format_summary, OutputFormat, SummaryFormatter};
use workout_core::models::{ComputedSummary, WorkoutType};

fn summary_for(code: &str, values: &[f64]) -> ComputedSummary {
    WorkoutFactory::build(code, values).unwrap().summary()
}

#[test]
fn test_reference_messages() {
    assert_eq!(
        SummaryFormatter::format(&summary_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])),
        "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
    assert_eq!(
        SummaryFormatter::format(&summary_for("RUN", &[15_000.0, 1.0, 75.0])),
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burned: 699.750."
    );
    assert_eq!(
        SummaryFormatter::format(&summary_for("WLK", &[9000.0, 1.0, 75.0, 180.0])),
        "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 157.500."
    );
}

#[test]
fn test_every_numeric_field_has_three_decimals() {
    let summary = ComputedSummary::new(WorkoutType::Running, 0.5, 12.0, 24.123_456, 1234.5);
    let line = SummaryFormatter::format(&summary);

    for expected in ["0.500 h", "12.000 km", "24.123 km/h", "1234.500."] {
        assert!(line.contains(expected), "{line} should contain {expected}");
    }
    assert!(!line.contains(','), "decimal separator must be '.'");
    assert!(!line.contains('\n'));
}

#[test]
fn test_field_order_is_fixed() {
    let line = SummaryFormatter::format(&summary_for("RUN", &[15_000.0, 1.0, 75.0]));
    let positions: Vec<usize> = ["Workout type", "Duration", "Distance", "Mean speed", "Calories"]
        .iter()
        .map(|label| line.find(label).unwrap())
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_text_output_metadata() {
    let output = format_summary(
        &summary_for("RUN", &[15_000.0, 1.0, 75.0]),
        OutputFormat::Text,
    )
    .unwrap();

    assert_eq!(output.format, OutputFormat::Text);
    assert_eq!(output.content_type, "text/plain");
    assert!(output.data.starts_with("Workout type: Running;"));
}

#[test]
fn test_json_output_rounds_to_three_decimals() {
    let output = format_summary(
        &summary_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        OutputFormat::Json,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(value["workout_type"], "Swimming");
    assert_eq!(value["duration_hours"], 1.0);
    assert_eq!(value["distance_km"], 0.994);
    assert_eq!(value["mean_speed_kmh"], 1.0);
    assert_eq!(value["calories_kcal"], 336.0);
}
