// ABOUTME: Core types and constants for the workout calculator
// ABOUTME: Foundation crate with error handling, workout models, formula constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! calculator. It has no knowledge of how metrics are computed; it only
//! defines what they look like and how they are rendered.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and per-workout formula coefficients
//! - **models**: `WorkoutType` and `ComputedSummary`
//! - **formatters**: One-line text and JSON rendering of summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and formula coefficients organized by workout type
pub mod constants;

/// Core data models (`WorkoutType`, `ComputedSummary`)
pub mod models;

/// Summary rendering (text, JSON)
pub mod formatters;
