//! World Cup Scoreboard - live football match tracking
//!
//! The crate keeps the matches currently being played on an in-memory board
//! and produces an ordered summary of them. Optional modules are gated behind
//! cargo features:
//!
//! - **`scoreboard`** - Matches, validation, clock and the board itself (always on)
//! - **`config`** - TOML configuration and `.env` environment loading
//! - **`observability`** - Markdown match journal and a journaling scoreboard
//! - **`cli`** - Command scripts, summary rendering and the `scoreboard` binary
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! worldcup-scoreboard = "1.0"
//! # Or with journaling and configuration:
//! worldcup-scoreboard = { version = "1.0", features = ["config", "observability"] }
//! # Or everything:
//! worldcup-scoreboard = { version = "1.0", features = ["all"] }
//! ```
//!
//! # Example: Tracking matches
//!
//! ```
//! use worldcup_scoreboard::prelude::*;
//!
//! let scoreboard = new_scoreboard();
//! scoreboard.start_match("Uruguay", "Italy").unwrap();
//! scoreboard.update_score("Uruguay", "Italy", 6, 6).unwrap();
//!
//! for (rank, row) in scoreboard.summary().iter().enumerate() {
//!     println!("{}. {}", rank + 1, row);
//! }
//! ```
//!
//! # Example: Journaling every operation
//!
//! ```ignore
//! use worldcup_scoreboard::observability::{JournaledScoreboard, Logger};
//! use worldcup_scoreboard::scoreboard::{InMemoryScoreboard, Scoreboard};
//!
//! let logger = Logger::new(None, Some("DEBUG")).unwrap();
//! let scoreboard = JournaledScoreboard::new(InMemoryScoreboard::default(), logger);
//! scoreboard.start_match("Mexico", "Canada").unwrap();
//! ```

#![warn(missing_docs)]

/// Live match scoreboard (always enabled)
pub mod scoreboard;

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Match journal and journaling scoreboard (enabled with the `observability` feature)
#[cfg(feature = "observability")]
pub mod observability;

/// Command scripts and summary rendering (enabled with the `cli` feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::scoreboard::{
        new_scoreboard, InMemoryScoreboard, Match, Scoreboard, ScoreboardCache, ScoreboardClock,
        ScoreboardError, ScoreboardResult, SystemClock,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader};

    #[cfg(feature = "observability")]
    pub use crate::observability::{JournaledScoreboard, Logger};

    #[cfg(feature = "cli")]
    pub use crate::cli::{CliError, CliResult, ScoreboardCommand};
}
