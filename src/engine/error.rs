// src/engine/error.rs
use thiserror::Error;

/// Everything an evaluation pass can report back to a front end.
/// Messages are written to be shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvaluationError {
    #[error("Unknown position group: \"{group}\"")]
    UnknownPositionGroup { group: String },

    #[error("Missing metrics for {group}: {}", .metrics.join(", "))]
    MissingMetric { group: String, metrics: Vec<String> },

    #[error("Input table lacks required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error(
        "No eligible players in {group} (minutes {min_minutes}-{max_minutes}, age <= {max_age})"
    )]
    NoEligiblePlayers {
        group: String,
        min_minutes: u32,
        max_minutes: u32,
        max_age: u32,
    },

    #[error("Invalid tier weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("Impact per minute is undefined for {player} (0 minutes played)")]
    UndefinedImpact { player: String },
}

impl EvaluationError {
    /// An empty filter result is a reportable state, not a failure.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EvaluationError::NoEligiblePlayers { .. })
    }
}
