//! Error types for scoreboard operations

use thiserror::Error;

/// Result type for scoreboard operations
pub type ScoreboardResult<T> = Result<T, ScoreboardError>;

/// Errors raised by the scoreboard.
///
/// The message carried by each variant is the complete, user-facing text;
/// `Display` renders it unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    /// Input is missing, blank or malformed
    #[error("{0}")]
    Input(String),

    /// Input conflicts with the current state of the scoreboard
    #[error("{0}")]
    Consistency(String),
}

impl ScoreboardError {
    /// Create an input error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input(message.into())
    }

    /// Create a consistency error
    pub fn consistency<S: Into<String>>(message: S) -> Self {
        Self::Consistency(message.into())
    }

    /// Missing input value
    pub fn null_input(field: &str) -> Self {
        Self::input(format!("An input value is null: {}", field))
    }

    /// Blank input value
    pub fn blank_input(field: &str) -> Self {
        Self::input(format!("An input value is blank: {}", field))
    }

    /// Score token that is not a non-negative integer
    pub fn invalid_score(field: &str) -> Self {
        Self::input(format!("An input value is not a valid score: {}", field))
    }

    /// Match that is already live
    pub fn already_started(home_team: &str, away_team: &str) -> Self {
        Self::consistency(format!(
            "This match({}-{}) has already started.",
            home_team, away_team
        ))
    }

    /// Match that is not live
    pub fn not_started(home_team: &str, away_team: &str) -> Self {
        Self::consistency(format!(
            "This match({}-{}) has not been started.",
            home_team, away_team
        ))
    }

    /// Update that would not change the recorded score
    pub fn already_recorded() -> Self {
        Self::consistency("The score input is already recorded.")
    }

    /// Update that would lower a recorded score
    pub fn decreasing_score(field: &str) -> Self {
        Self::consistency(format!(
            "An input value is inconsistent: {}. The score can only be increased or unchanged.",
            field
        ))
    }

    /// Check if this error was caused by invalid input
    pub fn is_input(&self) -> bool {
        matches!(self, ScoreboardError::Input(_))
    }

    /// Check if this error was caused by a state conflict
    pub fn is_consistency(&self) -> bool {
        matches!(self, ScoreboardError::Consistency(_))
    }

    /// The bare message without a family prefix
    pub fn message(&self) -> &str {
        match self {
            ScoreboardError::Input(message) | ScoreboardError::Consistency(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ScoreboardError::already_started("Mexico", "Canada");
        assert_eq!(err.to_string(), "This match(Mexico-Canada) has already started.");
        assert_eq!(err.message(), "This match(Mexico-Canada) has already started.");
    }

    #[test]
    fn test_families() {
        assert!(ScoreboardError::blank_input("Home Team").is_input());
        assert!(!ScoreboardError::blank_input("Home Team").is_consistency());
        assert!(ScoreboardError::already_recorded().is_consistency());
        assert!(ScoreboardError::not_started("A", "B").is_consistency());
    }

    #[test]
    fn test_decreasing_score_message() {
        let err = ScoreboardError::decreasing_score("Home Team Score");
        assert_eq!(
            err.to_string(),
            "An input value is inconsistent: Home Team Score. The score can only be increased or unchanged."
        );
    }
}
