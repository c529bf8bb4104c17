//! Command-line front-end
//!
//! Parses arguments with clap, loads configuration and environment, builds
//! the scoreboard (journaled when a journal is configured) and routes to the
//! command handlers.

use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::commands::{run_lines, run_script, RunOptions, RunReport};
use crate::cli::error::{CliError, CliResult};
use crate::cli::render::RenderOptions;
use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader, OutputFormat};
use crate::observability::{JournaledScoreboard, Logger};
use crate::scoreboard::{InMemoryScoreboard, Scoreboard};

/// Live football scoreboard
#[derive(Debug, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Track live football matches and print the scoreboard summary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a .env file to load
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Options shared by the commands that drive a scoreboard
#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    /// Output format for summaries (text, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Write a journal even if none is configured
    #[arg(long)]
    pub journal: bool,
}

/// Subcommands of the `scoreboard` binary
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a command script against a fresh scoreboard
    Run {
        /// Script file (one command per line)
        script: PathBuf,

        /// Report failing lines and continue
        #[arg(long)]
        keep_going: bool,

        /// Output and journal options
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Read commands from standard input
    Repl {
        /// Output and journal options
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Validate configuration and environment
    ConfigCheck,

    /// Show version information
    Version,
}

/// Resolved configuration for one invocation
#[derive(Debug)]
pub struct Context {
    /// Environment the configuration was resolved against
    pub env: EnvironmentLoader,
    /// Loaded configuration and its source file
    pub loader: ConfigurationLoader,
}

impl Context {
    /// Load the environment first so it can name the config file.
    pub fn load(config_path: Option<&Path>, env_file: Option<&Path>) -> CliResult<Self> {
        let env = EnvironmentLoader::new(env_file);
        let config_path = config_path.map(Path::to_path_buf).or_else(|| env.config_path());
        let mut loader = ConfigurationLoader::new(config_path.as_deref())?;
        loader.config.apply_environment(&env);
        loader
            .config
            .validate()
            .map_err(|e| CliError::Config(format!("{:#}", e)))?;
        Ok(Self { env, loader })
    }

    /// Effective configuration
    pub fn config(&self) -> &Configuration {
        &self.loader.config
    }

    fn render_options(&self, session: &SessionArgs) -> RenderOptions {
        let mut render =
            RenderOptions::from_display(&self.config().display, Some(self.config().scoreboard.name.as_str()));
        if let Some(format) = session.format {
            render.format = format;
        }
        if session.no_color {
            render.color = false;
        }
        if render.format == OutputFormat::Json {
            render.title = None;
        }
        render
    }

    /// Run `f` against a fresh scoreboard, journaled when a journal is
    /// configured or requested.
    pub fn with_scoreboard(
        &self,
        session: &SessionArgs,
        f: impl FnOnce(&dyn Scoreboard) -> CliResult<RunReport>,
    ) -> CliResult<RunReport> {
        let logging = &self.config().logging;
        let log_file = logging.expanded_log_file()?;

        if log_file.is_none() && !session.journal {
            return f(&InMemoryScoreboard::default());
        }

        let logger = Logger::new(log_file.as_deref(), Some(logging.log_level.as_str()))?;
        logger.log_session_start(&self.config().scoreboard.name)?;
        tracing::info!("Journaling to {}", logger.log_file().display());

        let scoreboard = JournaledScoreboard::new(InMemoryScoreboard::default(), logger);
        let result = f(&scoreboard);
        let reason = match &result {
            Ok(report) => report.completion_reason(),
            Err(e) => format!("stopped: {}", e),
        };
        if let Err(e) = scoreboard.logger().log_completion(&reason) {
            tracing::warn!("Failed to close journal: {:#}", e);
        }
        result
    }
}

/// Main CLI runner that routes to command handlers
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let ctx = Context::load(cli.config.as_deref(), cli.env_file.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            script,
            keep_going,
            session,
        } => {
            let report = run_script_file(&ctx, &script, keep_going, &session, &mut out)?;
            if !report.is_success() {
                return Err(CliError::Failed {
                    failed: report.failures.len(),
                    total: report.failures.len() + report.applied,
                });
            }
            Ok(())
        }
        Commands::Repl { session } => {
            let opts = RunOptions {
                keep_going: true,
                render: ctx.render_options(&session),
                echo: true,
            };
            let stdin = io::stdin();
            ctx.with_scoreboard(&session, |scoreboard| {
                run_lines(scoreboard, stdin.lock(), &mut out, &opts)
            })?;
            Ok(())
        }
        Commands::ConfigCheck => config_check(&ctx, &mut out),
        Commands::Version => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
    }
}

/// Run a script file against a fresh scoreboard.
pub fn run_script_file<W: Write>(
    ctx: &Context,
    script: &Path,
    keep_going: bool,
    session: &SessionArgs,
    out: &mut W,
) -> CliResult<RunReport> {
    let content = fs::read_to_string(script).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read script {}: {}", script.display(), e),
        )
    })?;
    let opts = RunOptions {
        keep_going,
        render: ctx.render_options(session),
        echo: false,
    };
    tracing::debug!("Running script {}", script.display());
    ctx.with_scoreboard(session, |scoreboard| {
        run_script(scoreboard, &content, out, &opts)
    })
}

/// Configuration check command
///
/// Reports where configuration came from and what the effective values are.
pub fn config_check<W: Write>(ctx: &Context, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", "Configuration Check".cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;

    match &ctx.loader.config_path {
        Some(path) => {
            writeln!(out, "{}", format!("Config file: {}", path.display()).green())?;
            writeln!(out, "{}", "✓ Config file is valid".green())?;
        }
        None => writeln!(out, "{}", "Using default configuration".yellow())?,
    }

    match ctx.env.env_file() {
        Some(path) if path.exists() => {
            writeln!(out, "{}", format!("Env file: {}", path.display()).green())?;
        }
        Some(path) => {
            writeln!(out, "{}", format!("✗ Env file does not exist: {}", path.display()).red())?;
        }
        None => writeln!(out, "{}", "No environment file specified".yellow())?,
    }

    writeln!(out, "\n{}", ConfigurationLoader::from_config(ctx.config().clone()).to_toml()?)?;
    Ok(())
}
