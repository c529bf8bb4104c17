//! Environment variable loading and management.
//!
//! Environment values take precedence over the TOML file; see
//! [`Configuration::apply_environment`](super::Configuration::apply_environment).

use std::env;
use std::path::{Path, PathBuf};

/// Variable naming the config file
pub const CONFIG_VAR: &str = "SCOREBOARD_CONFIG";
/// Variable overriding `logging.log_level`
pub const LOG_LEVEL_VAR: &str = "SCOREBOARD_LOG_LEVEL";
/// Variable overriding `logging.log_file`
pub const LOG_FILE_VAR: &str = "SCOREBOARD_LOG_FILE";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to .env file. Nothing is loaded when None.
    pub fn new(env_file: Option<&Path>) -> Self {
        // Only an explicit path is loaded, never ./.env
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!("Failed to load .env file {}: {}", path.display(), e);
                }
            } else {
                tracing::warn!("Env file does not exist: {}", path.display());
            }
        }

        Self {
            env_file: env_file.map(Path::to_path_buf),
        }
    }

    /// The .env file this loader was created with.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Config file named in the environment.
    pub fn config_path(&self) -> Option<PathBuf> {
        non_empty_var(CONFIG_VAR).map(PathBuf::from)
    }

    /// Log level named in the environment.
    pub fn log_level(&self) -> Option<String> {
        non_empty_var(LOG_LEVEL_VAR)
    }

    /// Journal file named in the environment.
    pub fn log_file(&self) -> Option<String> {
        non_empty_var(LOG_FILE_VAR)
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use std::fs;
    use tempfile::TempDir;

    // Environment variables are process-global; keep every assertion that
    // touches them in this one test.
    #[test]
    fn test_environment_overrides() {
        env::remove_var(LOG_LEVEL_VAR);
        env::remove_var(LOG_FILE_VAR);
        env::remove_var(CONFIG_VAR);

        let env_loader = EnvironmentLoader::default();
        assert_eq!(env_loader.log_level(), None);
        assert_eq!(env_loader.config_path(), None);

        env::set_var(LOG_LEVEL_VAR, "DEBUG");
        env::set_var(LOG_FILE_VAR, "/tmp/scoreboard.md");
        env::set_var(CONFIG_VAR, "");

        let env_loader = EnvironmentLoader::default();
        let mut config = Configuration::default();
        config.apply_environment(&env_loader);
        assert_eq!(config.logging.log_level, "DEBUG");
        assert_eq!(config.logging.log_file.as_deref(), Some("/tmp/scoreboard.md"));
        assert_eq!(env_loader.config_path(), None);

        env::remove_var(LOG_LEVEL_VAR);
        env::remove_var(LOG_FILE_VAR);
        env::remove_var(CONFIG_VAR);

        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(&env_path, "SCOREBOARD_LOG_LEVEL=WARN\n").unwrap();
        let env_loader = EnvironmentLoader::new(Some(env_path.as_path()));
        assert_eq!(env_loader.env_file(), Some(env_path.as_path()));
        assert_eq!(env_loader.log_level(), Some("WARN".to_string()));

        env::remove_var(LOG_LEVEL_VAR);
    }

    #[test]
    fn test_missing_env_file_is_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let env_loader = EnvironmentLoader::new(Some(temp_dir.path().join("missing.env").as_path()));
        assert!(env_loader.env_file().is_some());
    }
}
