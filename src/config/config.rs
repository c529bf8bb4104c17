//! TOML configuration parsing and management.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::environment::EnvironmentLoader;

/// Log levels accepted in `[logging]`
pub const LOG_LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// `[scoreboard]` section
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
    /// `[logging]` section
    #[serde(default)]
    pub logging: LoggingConfig,
    /// `[display]` section
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Scoreboard identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    /// Title shown above summaries and in the journal header
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "World Cup Scoreboard".to_string()
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Journal file; a timestamped temp file is used when unset
    pub log_file: Option<String>,
    /// One of [`LOG_LEVELS`], case-insensitive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Journal path with `~` and environment variables expanded.
    pub fn expanded_log_file(&self) -> Result<Option<PathBuf>> {
        self.log_file
            .as_deref()
            .map(|raw| {
                shellexpand::full(raw)
                    .map(|expanded| PathBuf::from(expanded.into_owned()))
                    .with_context(|| format!("Failed to expand log file path: {}", raw))
            })
            .transpose()
    }
}

/// Summary output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered table
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Summary format
    #[serde(default)]
    pub format: OutputFormat,
    /// Coloured terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Configuration {
    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.scoreboard.name.trim().is_empty() {
            bail!("scoreboard.name must not be blank");
        }
        let level = self.logging.log_level.to_ascii_uppercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.log_level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }

    /// Overlay values set in the environment.
    pub fn apply_environment(&mut self, env: &EnvironmentLoader) {
        if let Some(level) = env.log_level() {
            self.logging.log_level = level;
        }
        if let Some(file) = env.log_file() {
            self.logging.log_file = Some(file);
        }
    }
}

/// Loads and manages TOML configuration.
#[derive(Debug)]
pub struct ConfigurationLoader {
    /// File the configuration was read from, if any
    pub config_path: Option<PathBuf>,
    /// Parsed and validated configuration
    pub config: Configuration,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. It must exist when given.
    ///   If None, the platform config file is used when present, otherwise defaults.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Self::default_config_path().filter(|path| path.exists()),
        };

        let config = match &config_path {
            Some(path) => Self::load_config(path)?,
            None => Configuration::default(),
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Create a configuration loader from a pre-parsed Configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config_path: None,
            config,
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Configuration =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Platform config location: `<config dir>/worldcup-scoreboard/scoreboard.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("worldcup-scoreboard").join("scoreboard.toml"))
    }

    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Configuration = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Serialize the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.config).context("Failed to serialize configuration")
    }
}
