//! Configuration management for the scoreboard.
//!
//! This module provides configuration loading through TOML files and
//! environment variable management via `.env` files.
//!
//! # Example
//!
//! ```no_run
//! use worldcup_scoreboard::config::{ConfigurationLoader, EnvironmentLoader};
//! use std::path::Path;
//!
//! // Load environment variables
//! let env = EnvironmentLoader::new(Some(Path::new(".env")));
//!
//! // Load configuration from TOML, then let the environment override it
//! let mut loader = ConfigurationLoader::new(env.config_path().as_deref()).unwrap();
//! loader.config.apply_environment(&env);
//!
//! println!("Log level: {}", loader.config.logging.log_level);
//! ```

#[allow(clippy::module_inception)]
pub mod config;
pub mod environment;

// Re-export main types for convenience
pub use self::config::{
    Configuration, ConfigurationLoader, DisplayConfig, LoggingConfig, OutputFormat,
    ScoreboardConfig, LOG_LEVELS,
};
pub use self::environment::EnvironmentLoader;
