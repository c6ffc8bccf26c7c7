// ABOUTME: Workout type enumeration keyed by the three-letter sensor type code
// ABOUTME: Maps SWM/RUN/WLK to display labels and positional argument arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Supported workout types
///
/// Serialized as the sensor type code (`"SWM"`, `"RUN"`, `"WLK"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Pool swimming, code `SWM`
    #[serde(rename = "SWM")]
    Swimming,
    /// Running, code `RUN`
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking, code `WLK`
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    /// All workout types in code-table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter sensor type code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Label used in rendered summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional raw values a record of this type carries
    ///
    /// Running: action, duration, weight. Sports walking adds height.
    /// Swimming adds pool length and pool count.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|workout_type| workout_type.code() == s)
            .ok_or_else(|| AppError::unknown_workout_type(s))
    }
}
