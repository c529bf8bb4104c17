//! CLI feature - drive a scoreboard from scripts or an interactive session
//!
//! # Architecture
//!
//! - `script` - the line-oriented command language
//! - `commands` - applies parsed commands to any [`Scoreboard`](crate::scoreboard::Scoreboard)
//! - `render` - summary tables, JSON output and console error hints
//! - `runner` - clap front-end wiring configuration, journal and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use worldcup_scoreboard::cli::{run_script, RunOptions};
//! use worldcup_scoreboard::scoreboard::new_scoreboard;
//!
//! let scoreboard = new_scoreboard();
//! let mut out = Vec::new();
//! run_script(&scoreboard, "start Mexico Canada\nsummary\n", &mut out, &RunOptions::default())?;
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod runner;
pub mod script;

pub use commands::{execute, run_lines, run_script, CommandOutcome, LineFailure, RunOptions, RunReport};
pub use error::{CliError, CliResult};
pub use render::{display_error_with_suggestions, render_summary, RenderOptions};
pub use runner::{run_cli, Cli, Commands, Context, SessionArgs};
pub use script::{parse_line, tokenize, ScoreboardCommand};
