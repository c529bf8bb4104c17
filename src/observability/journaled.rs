//! Scoreboard decorator that journals every request.

use super::logger::Logger;
use crate::scoreboard::{Match, Scoreboard, ScoreboardResult};

/// Wraps a [`Scoreboard`] and records each request in a [`Logger`].
///
/// The wrapped scoreboard's result is always returned as-is. A journal
/// write failure is reported through `tracing` and otherwise ignored.
#[derive(Debug)]
pub struct JournaledScoreboard<S> {
    inner: S,
    logger: Logger,
}

impl<S: Scoreboard> JournaledScoreboard<S> {
    /// Journal every request made to `inner`.
    pub fn new(inner: S, logger: Logger) -> Self {
        Self { inner, logger }
    }

    /// The wrapped scoreboard
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The journal being written
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Stop journaling and hand back the scoreboard
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn record(
        &self,
        operation: &str,
        result: &ScoreboardResult<()>,
        on_success: impl FnOnce(&Logger) -> anyhow::Result<()>,
    ) {
        let written = match result {
            Ok(()) => on_success(&self.logger),
            Err(e) => self.logger.log_rejected(operation, e),
        };
        if let Err(e) = written {
            tracing::warn!(
                "Failed to journal {} to {}: {:#}",
                operation,
                self.logger.log_file().display(),
                e
            );
        }
    }
}

impl<S: Scoreboard> Scoreboard for JournaledScoreboard<S> {
    fn start_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        let result = self.inner.start_match(home_team, away_team);
        self.record("start", &result, |logger| {
            logger.log_match_started(home_team, away_team)
        });
        result
    }

    fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> ScoreboardResult<()> {
        let result = self
            .inner
            .update_score(home_team, away_team, home_score, away_score);
        self.record("update", &result, |logger| {
            logger.log_score_updated(home_team, away_team, home_score, away_score)
        });
        result
    }

    fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        let result = self.inner.finish_match(home_team, away_team);
        self.record("finish", &result, |logger| {
            logger.log_match_finished(home_team, away_team)
        });
        result
    }

    fn summary(&self) -> Vec<Match> {
        let summary = self.inner.summary();
        if let Err(e) = self.logger.log_summary(&summary) {
            tracing::warn!("Failed to journal summary: {:#}", e);
        }
        summary
    }
}
