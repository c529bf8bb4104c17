//! Markdown journal of scoreboard activity.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::scoreboard::{Match, ScoreboardError};

/// Journal for scoreboard sessions.
///
/// Creates a markdown file recording match starts, score updates, finished
/// matches, rejected requests and (at DEBUG) summary snapshots.
#[derive(Debug)]
pub struct Logger {
    log_file: PathBuf,
    log_level: String,
    write_lock: Mutex<()>,
}

impl Logger {
    /// Initialize logger.
    ///
    /// # Arguments
    /// * `log_file` - Path to journal file. If None, creates a timestamped file in temp directory.
    /// * `log_level` - Logging level (defaults to "INFO").
    pub fn new(log_file: Option<&Path>, log_level: Option<&str>) -> Result<Self> {
        let log_file = match log_file {
            Some(p) => p.to_path_buf(),
            None => {
                let mut dir = std::env::temp_dir();
                dir.push("scoreboard-logs");
                std::fs::create_dir_all(&dir).with_context(|| {
                    format!("Failed to create log directory: {}", dir.display())
                })?;
                let filename = format!(
                    "scoreboard_{}_{}.md",
                    Utc::now().timestamp_millis(),
                    std::process::id()
                );
                dir.join(filename)
            }
        };

        let log_level = log_level.unwrap_or("INFO").to_ascii_uppercase();

        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let logger = Self {
            log_file,
            log_level,
            write_lock: Mutex::new(()),
        };

        if !logger.log_file.exists() {
            logger.initialize_log_file()?;
        }

        Ok(logger)
    }

    /// Initialize the journal file with header.
    fn initialize_log_file(&self) -> Result<()> {
        let mut file = File::create(&self.log_file)
            .with_context(|| format!("Failed to create log file: {}", self.log_file.display()))?;

        let now: DateTime<Utc> = Utc::now();
        let header = format!(
            "# Scoreboard Journal\n\nLog started: {}\n\n---\n\n",
            now.to_rfc3339()
        );
        file.write_all(header.as_bytes())
            .with_context(|| format!("Failed to write log file: {}", self.log_file.display()))?;

        Ok(())
    }

    /// Append content to the journal in a single write.
    fn append_to_log(&self, content: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Failed to open log file: {}", self.log_file.display()))?;

        file.write_all(content.as_bytes())
            .with_context(|| "Failed to write to log file")?;

        Ok(())
    }

    fn entry(&self, title: &str, body: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        self.append_to_log(&format!("### {} - {}\n\n{}\n\n", title, now.to_rfc3339(), body))
    }

    /// Log session start.
    ///
    /// # Arguments
    /// * `name` - Scoreboard title.
    pub fn log_session_start(&self, name: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "## Session Started - {}\n\n**Scoreboard:** {}\n**Level:** {}\n\n",
            now.to_rfc3339(),
            name,
            self.log_level
        );

        self.append_to_log(&content)?;
        tracing::info!("Scoreboard session started: {}", name);
        Ok(())
    }

    /// Log a match being put on the board.
    pub fn log_match_started(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.entry(
            "Match Started",
            &format!("**Home:** {}\n**Away:** {}", home_team, away_team),
        )
    }

    /// Log a score update.
    pub fn log_score_updated(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<()> {
        self.entry(
            "Score Updated",
            &format!(
                "**Match:** {} - {}\n**Score:** {} - {}",
                home_team, away_team, home_score, away_score
            ),
        )
    }

    /// Log a match leaving the board.
    pub fn log_match_finished(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.entry(
            "Match Finished",
            &format!("**Match:** {} - {}", home_team, away_team),
        )
    }

    /// Log a request the scoreboard refused.
    ///
    /// # Arguments
    /// * `operation` - Operation name (start, update, finish).
    /// * `error` - Rejection reason.
    pub fn log_rejected(&self, operation: &str, error: &ScoreboardError) -> Result<()> {
        let kind = if error.is_input() { "Input" } else { "Consistency" };
        self.entry(
            "Request Rejected",
            &format!(
                "**Operation:** {}\n**Kind:** {}\n**Reason:** {}",
                operation,
                kind,
                error.message()
            ),
        )
    }

    /// Log a summary snapshot. Only written at DEBUG or TRACE.
    pub fn log_summary(&self, summary: &[Match]) -> Result<()> {
        if !self.is_debug() {
            return Ok(());
        }

        let body = if summary.is_empty() {
            "_No live matches_".to_string()
        } else {
            summary
                .iter()
                .enumerate()
                .map(|(i, row)| format!("{}. {}", i + 1, row))
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.entry("Summary", &body)
    }

    /// Log session completion.
    ///
    /// # Arguments
    /// * `reason` - Reason for completion.
    pub fn log_completion(&self, reason: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### Session Completed - {}\n\n**Reason:** {}\n\n---\n\n",
            now.to_rfc3339(),
            reason
        );

        self.append_to_log(&content)?;
        tracing::info!("Scoreboard session completed: {}", reason);
        Ok(())
    }

    /// Log custom content.
    ///
    /// # Arguments
    /// * `title` - Log entry title.
    /// * `content` - Log content.
    pub fn log_custom(&self, title: &str, content: &str) -> Result<()> {
        self.entry(title, content)
    }

    /// Whether DEBUG entries are written.
    pub fn is_debug(&self) -> bool {
        matches!(self.log_level.as_str(), "DEBUG" | "TRACE")
    }

    /// Get the log file path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Get the log level.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}
