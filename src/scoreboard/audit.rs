//! Input and state validation for scoreboard operations.
//!
//! The audit is the only place scoreboard errors are raised. Each check
//! either passes or returns the error that terminates the request; callers
//! run all checks before touching the board.

use super::errors::{ScoreboardError, ScoreboardResult};
use super::model::Score;

/// Home team field descriptor
pub const HOME_TEAM: &str = "Home Team";

/// Away team field descriptor
pub const AWAY_TEAM: &str = "Away Team";

/// Home team score field descriptor
pub const HOME_TEAM_SCORE: &str = "Home Team Score";

/// Away team score field descriptor.
///
/// Reported as "Away Team" in messages; existing consumers match on it.
pub const AWAY_TEAM_SCORE: &str = "Away Team";

/// Validator for incoming scoreboard requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardAudit;

impl ScoreboardAudit {
    /// Create a validator
    pub fn new() -> Self {
        Self
    }

    /// Check both team names, home first.
    pub fn check_input_validity(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        self.check_blank_input(HOME_TEAM, home_team)?;
        self.check_blank_input(AWAY_TEAM, away_team)
    }

    /// Reject empty or whitespace-only values.
    ///
    /// No-break spaces (U+00A0, U+2007, U+202F) are not whitespace here, and
    /// the control separators U+001C to U+001F are.
    pub fn check_blank_input(&self, field: &str, input: &str) -> ScoreboardResult<()> {
        if input.chars().all(is_blank_char) {
            return Err(ScoreboardError::blank_input(field));
        }
        Ok(())
    }

    /// Unwrap a value that may be absent, rejecting `None`.
    pub fn check_present<'a>(&self, field: &str, input: Option<&'a str>) -> ScoreboardResult<&'a str> {
        input.ok_or_else(|| ScoreboardError::null_input(field))
    }

    /// The match must not be live yet.
    pub fn check_must_not_have_entry(
        &self,
        has_entry: bool,
        home_team: &str,
        away_team: &str,
    ) -> ScoreboardResult<()> {
        if has_entry {
            return Err(ScoreboardError::already_started(home_team, away_team));
        }
        Ok(())
    }

    /// The match must already be live.
    pub fn check_must_have_entry(
        &self,
        has_entry: bool,
        home_team: &str,
        away_team: &str,
    ) -> ScoreboardResult<()> {
        if !has_entry {
            return Err(ScoreboardError::not_started(home_team, away_team));
        }
        Ok(())
    }

    /// Like [`Self::check_must_have_entry`], handing back the live entry.
    pub fn check_entry<T>(&self, entry: Option<T>, home_team: &str, away_team: &str) -> ScoreboardResult<T> {
        entry.ok_or_else(|| ScoreboardError::not_started(home_team, away_team))
    }

    /// An update must change the score and never lower either side.
    ///
    /// The identical-score check runs first, then home, then away.
    pub fn check_score_consistency(&self, input: Score, recorded: Score) -> ScoreboardResult<()> {
        if input == recorded {
            return Err(ScoreboardError::already_recorded());
        }
        self.check_score_not_lower(HOME_TEAM_SCORE, input.home_score, recorded.home_score)?;
        self.check_score_not_lower(AWAY_TEAM_SCORE, input.away_score, recorded.away_score)
    }

    fn check_score_not_lower(&self, field: &str, input: u32, recorded: u32) -> ScoreboardResult<()> {
        if input < recorded {
            return Err(ScoreboardError::decreasing_score(field));
        }
        Ok(())
    }

    /// Parse a textual score into a non-negative goal count.
    pub fn parse_score(&self, field: &str, token: &str) -> ScoreboardResult<u32> {
        token
            .trim()
            .parse::<u32>()
            .map_err(|_| ScoreboardError::invalid_score(field))
    }
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        other => other.is_whitespace(),
    }
}
