//! Observability utilities for the scoreboard.
//!
//! This module provides a markdown journal of scoreboard sessions and a
//! scoreboard decorator that writes to it. Operational events are emitted
//! through `tracing` by the scoreboard itself.
//!
//! # Example
//!
//! ```no_run
//! use worldcup_scoreboard::observability::{JournaledScoreboard, Logger};
//! use worldcup_scoreboard::scoreboard::{InMemoryScoreboard, Scoreboard};
//!
//! // Create a journal
//! let logger = Logger::new(None, Some("DEBUG")).unwrap();
//! logger.log_session_start("World Cup Scoreboard").unwrap();
//!
//! // Every request made through the wrapper is journaled
//! let scoreboard = JournaledScoreboard::new(InMemoryScoreboard::default(), logger);
//! scoreboard.start_match("Mexico", "Canada").unwrap();
//! scoreboard.update_score("Mexico", "Canada", 0, 1).unwrap();
//!
//! // Log completion
//! scoreboard.logger().log_completion("Final whistle").unwrap();
//! ```

pub mod journaled;
pub mod logger;

// Re-export main types for convenience
pub use journaled::JournaledScoreboard;
pub use logger::Logger;
