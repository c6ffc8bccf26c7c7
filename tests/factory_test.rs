// ABOUTME: Integration tests for workout construction from type codes and raw values
// ABOUTME: Verifies type code, arity, and field validation errors surface as typed AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::json;
use workout_calculator::factory::{read_package, WorkoutFactory, WorkoutPackage};
use workout_calculator::formulas::{CalorieFormula, Workout};
use workout_core::errors::ErrorCode;
use workout_core::models::WorkoutType;

#[test]
fn test_build_selects_variant_by_code() {
    assert!(matches!(
        WorkoutFactory::build("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap(),
        Workout::Swimming(_)
    ));
    assert!(matches!(
        WorkoutFactory::build("RUN", &[15_000.0, 1.0, 75.0]).unwrap(),
        Workout::Running(_)
    ));
    assert!(matches!(
        WorkoutFactory::build("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap(),
        Workout::SportsWalking(_)
    ));
}

#[test]
fn test_unknown_type_code_always_fails() {
    let value_sets: [&[f64]; 3] = [&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 1.0], &[]];
    for code in ["BIKE", "SWIM", "R", "", "123"] {
        for values in value_sets {
            let error = WorkoutFactory::build(code, values).unwrap_err();
            assert_eq!(error.code, ErrorCode::UnknownWorkoutType, "code {code:?}");
        }
    }
}

#[test]
fn test_type_code_lookup_is_exact() {
    for code in ["run", " run ", " RUN", "Run"] {
        let error = WorkoutFactory::build(code, &[15_000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutType, "code {code:?}");
    }
}

#[test]
fn test_type_code_is_checked_before_arity() {
    let error = WorkoutFactory::build("BIKE", &[]).unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
}

#[test]
fn test_arity_mismatch_fails_for_every_type() {
    for workout_type in WorkoutType::ALL {
        let arity = workout_type.arity();
        for len in [0, arity - 1, arity + 1] {
            let values = vec![1.0; len];
            let error = WorkoutFactory::build(workout_type.code(), &values).unwrap_err();

            assert_eq!(error.code, ErrorCode::InvalidArgumentCount);
            assert_eq!(error.details["expected"], arity);
            assert_eq!(error.details["actual"], len);
        }
    }
}

#[test]
fn test_zero_duration_is_invalid_input() {
    for (code, values) in [
        ("RUN", vec![15_000.0, 0.0, 75.0]),
        ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        let error = WorkoutFactory::build(code, &values).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "{code}");
        assert_eq!(error.details["field"], "duration_hours");
    }
}

#[test]
fn test_out_of_range_fields_are_invalid_input() {
    let cases = [
        ("RUN", vec![-1.0, 1.0, 75.0], "action_count"),
        ("RUN", vec![10.5, 1.0, 75.0], "action_count"),
        ("RUN", vec![1000.0, -1.0, 75.0], "duration_hours"),
        ("RUN", vec![1000.0, 1.0, 0.0], "weight_kg"),
        ("RUN", vec![1000.0, f64::NAN, 75.0], "duration_hours"),
        ("WLK", vec![1000.0, 1.0, 75.0, 0.0], "height_cm"),
        ("SWM", vec![720.0, 1.0, 80.0, 0.0, 40.0], "pool_length_m"),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 2.5], "pool_lengths_count"),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, -4.0], "pool_lengths_count"),
    ];

    for (code, values, field) in cases {
        let error = WorkoutFactory::build(code, &values).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "{code} {values:?}");
        assert_eq!(error.details["field"], field, "{code} {values:?}");
    }
}

#[test]
fn test_overflowing_metrics_are_invalid_input() {
    let cases = [
        ("RUN", vec![15_000.0, 1e-320, 75.0], "mean_speed_kmh"),
        ("SWM", vec![720.0, 1.0, 80.0, 1e308, 40.0], "mean_speed_kmh"),
        ("RUN", vec![15_000.0, 1.0, 1e308], "calories_kcal"),
    ];

    for (code, values, metric) in cases {
        let error = WorkoutFactory::build(code, &values).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "{code} {values:?}");
        assert_eq!(error.details["metric"], metric, "{code} {values:?}");
    }
}

#[test]
fn test_json_package_cannot_bypass_validation() {
    let package: WorkoutPackage = serde_json::from_value(json!({
        "workout_type": "RUN",
        "data": [15000, 0.0, -5.0]
    }))
    .unwrap();

    let error = read_package(&package).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.details["field"], "duration_hours");
}

#[test]
fn test_zero_actions_is_valid() {
    let workout = WorkoutFactory::build("RUN", &[0.0, 1.0, 75.0]).unwrap();
    assert!(workout.distance_km().abs() < common::EPSILON);
}

#[test]
fn test_read_package_accepts_integer_json_values() {
    let package: WorkoutPackage =
        serde_json::from_value(json!({ "workout_type": "RUN", "data": [15000, 1, 75] })).unwrap();

    let workout = read_package(&package).unwrap();
    common::assert_close(workout.spent_calories_kcal(), 699.75);
}

#[test]
fn test_read_package_error_precedence() {
    // Unknown type wins over arity and content problems
    let package = WorkoutPackage {
        workout_type: "BIKE".into(),
        data: vec![json!("x")],
    };
    assert_eq!(
        read_package(&package).unwrap_err().code,
        ErrorCode::UnknownWorkoutType
    );

    // Arity wins over content problems
    let package = WorkoutPackage {
        workout_type: "RUN".into(),
        data: vec![json!("x"), json!(1)],
    };
    assert_eq!(
        read_package(&package).unwrap_err().code,
        ErrorCode::InvalidArgumentCount
    );

    // Non-numeric value names its field
    let package = WorkoutPackage {
        workout_type: "RUN".into(),
        data: vec![json!(15000), json!(null), json!(75)],
    };
    let error = read_package(&package).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.details["field"], "duration_hours");
}
