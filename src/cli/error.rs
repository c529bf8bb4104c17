//! Error types for CLI operations

use thiserror::Error;

use crate::scoreboard::ScoreboardError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while driving a scoreboard from the command line
#[derive(Error, Debug)]
pub enum CliError {
    /// Request refused by the scoreboard
    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),

    /// Malformed command line
    #[error("line {line}: {message}")]
    Parse {
        /// Script line, starting at 1
        line: usize,
        /// What is wrong with it
        message: String,
    },

    /// A script command failed
    #[error("line {line}: {source}")]
    Script {
        /// Script line, starting at 1
        line: usize,
        /// The underlying failure
        #[source]
        source: Box<CliError>,
    },

    /// A run finished with rejected commands
    #[error("{failed} of {total} commands failed")]
    Failed {
        /// Commands rejected
        failed: usize,
        /// Commands attempted
        total: usize,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Attach a script line number
    pub fn at_line(self, line: usize) -> Self {
        match self {
            CliError::Parse { .. } | CliError::Script { .. } => self,
            other => CliError::Script {
                line,
                source: Box::new(other),
            },
        }
    }

    /// The scoreboard rejection behind this error, if any
    pub fn scoreboard_error(&self) -> Option<&ScoreboardError> {
        match self {
            CliError::Scoreboard(e) => Some(e),
            CliError::Script { source, .. } => source.scoreboard_error(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Config(format!("{:#}", err))
    }
}
