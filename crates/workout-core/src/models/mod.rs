// ABOUTME: Core data models shared by the calculation and rendering layers
// ABOUTME: Re-exports WorkoutType and ComputedSummary

/// Workout type codes, labels, and arity
pub mod workout_type;

/// Computed metrics for one workout
pub mod summary;

pub use summary::ComputedSummary;
pub use workout_type::WorkoutType;
