//! Error types for PlanMatch

use thiserror::Error;

/// Main error type for PlanMatch operations.
///
/// Scoring itself never fails; these errors only come from the strict
/// parsing helpers used at input boundaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanMatchError {
    /// A difficulty label outside Beginner/Intermediate/Advanced/Expert
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A focus tag label the vocabulary does not define
    #[error("Unknown focus tag: {0}")]
    UnknownFocusTag(String),

    /// A weight name that no rule reads
    #[error("Unknown weight: {0}")]
    UnknownWeight(String),

    /// A score literal that is not an integer
    #[error("Invalid score '{input}': {reason}")]
    InvalidScore { input: String, reason: String },
}

/// Result type alias for PlanMatch operations
pub type Result<T> = std::result::Result<T, PlanMatchError>;
