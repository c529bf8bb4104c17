//! Default in-memory scoreboard.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use super::audit::ScoreboardAudit;
use super::cache::ScoreboardCache;
use super::clock::{ScoreboardClock, SystemClock};
use super::errors::ScoreboardResult;
use super::model::{Match, MatchDetails, Score, TeamPair};
use super::Scoreboard;

/// Scoreboard backed by a shared [`ScoreboardCache`].
///
/// Every mutating call validates and applies its change inside a single
/// cache write, so a rejected call never alters the board.
#[derive(Clone)]
pub struct InMemoryScoreboard {
    cache: ScoreboardCache,
    clock: Arc<dyn ScoreboardClock>,
    audit: ScoreboardAudit,
}

impl InMemoryScoreboard {
    /// Assemble a scoreboard from its parts.
    ///
    /// # Arguments
    /// * `cache` - Board storage; clones of it observe the same matches.
    /// * `clock` - Source of match start times.
    /// * `audit` - Request validator.
    pub fn new(cache: ScoreboardCache, clock: Arc<dyn ScoreboardClock>, audit: ScoreboardAudit) -> Self {
        Self { cache, clock, audit }
    }

    /// Fresh board reading start times from `clock`.
    pub fn with_clock(clock: Arc<dyn ScoreboardClock>) -> Self {
        Self::new(ScoreboardCache::new(), clock, ScoreboardAudit::new())
    }

    /// Handle to the underlying board storage.
    pub fn cache(&self) -> &ScoreboardCache {
        &self.cache
    }

    /// Number of matches currently live.
    pub fn live_matches(&self) -> usize {
        self.cache.len()
    }

    fn log_outcome(operation: &str, pair: &TeamPair, result: &ScoreboardResult<()>) {
        match result {
            Ok(()) => debug!(operation, home = %pair.home_team, away = %pair.away_team, "scoreboard updated"),
            Err(e) => warn!(operation, home = %pair.home_team, away = %pair.away_team, error = %e, "scoreboard request rejected"),
        }
    }
}

impl Default for InMemoryScoreboard {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for InMemoryScoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryScoreboard")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Summary order: total score descending, then most recent start first.
fn summary_order(a: &(Match, u64), b: &(Match, u64)) -> Ordering {
    b.0.total_score()
        .cmp(&a.0.total_score())
        .then_with(|| b.0.match_time.cmp(&a.0.match_time))
        .then_with(|| b.1.cmp(&a.1))
}

impl Scoreboard for InMemoryScoreboard {
    fn start_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        let pair = TeamPair::new(home_team, away_team);
        let result = self.audit.check_input_validity(home_team, away_team).and_then(|()| {
            self.cache.write(|state| -> ScoreboardResult<()> {
                self.audit
                    .check_must_not_have_entry(state.has_entry(&pair), home_team, away_team)?;
                let sequence = state.next_sequence();
                state.put(pair.clone(), MatchDetails::started(self.clock.fetch_time(), sequence));
                Ok(())
            })
        });

        Self::log_outcome("start", &pair, &result);
        result
    }

    fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> ScoreboardResult<()> {
        let pair = TeamPair::new(home_team, away_team);
        let input = Score::new(home_score, away_score);
        let result = self.audit.check_input_validity(home_team, away_team).and_then(|()| {
            self.cache.write(|state| -> ScoreboardResult<()> {
                let details = self.audit.check_entry(state.get(&pair), home_team, away_team)?;
                self.audit.check_score_consistency(input, details.score)?;
                let updated = details.with_score(input);
                state.put(pair.clone(), updated);
                Ok(())
            })
        });

        Self::log_outcome("update", &pair, &result);
        result
    }

    fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        let pair = TeamPair::new(home_team, away_team);
        let result = self.audit.check_input_validity(home_team, away_team).and_then(|()| {
            self.cache.write(|state| -> ScoreboardResult<()> {
                self.audit
                    .check_must_have_entry(state.has_entry(&pair), home_team, away_team)?;
                state.remove(&pair);
                Ok(())
            })
        });

        Self::log_outcome("finish", &pair, &result);
        result
    }

    fn summary(&self) -> Vec<Match> {
        let mut rows: Vec<(Match, u64)> = self.cache.read(|state| {
            state
                .iter()
                .map(|(pair, details)| (Match::from_entry(pair, details), details.sequence))
                .collect()
        });
        rows.sort_by(summary_order);
        rows.into_iter().map(|(row, _)| row).collect()
    }
}
