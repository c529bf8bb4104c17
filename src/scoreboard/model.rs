//! Scoreboard data model.
//!
//! [`TeamPair`] keys the live board and [`MatchDetails`] holds what is known
//! about a running match. [`Match`] is the flattened row handed out by
//! summaries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two teams of a match, used as the board key.
///
/// Order is significant: home and away are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair {
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
}

impl TeamPair {
    /// Key for the given home and away teams
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home_team, self.away_team)
    }
}

/// Absolute score pair of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Home goals
    pub home_score: u32,
    /// Away goals
    pub away_score: u32,
}

impl Score {
    /// Score from goal counts
    pub fn new(home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
        }
    }

    /// Combined goals of both teams
    pub fn total(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

/// Live match state stored against a [`TeamPair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Wall-clock time the match was started on the board
    pub start_time: NaiveDateTime,
    /// Latest recorded score
    pub score: Score,
    /// Position in the order matches were started; breaks start-time ties
    pub sequence: u64,
}

impl MatchDetails {
    /// Details of a freshly started match (0-0)
    pub fn started(start_time: NaiveDateTime, sequence: u64) -> Self {
        Self {
            start_time,
            score: Score::default(),
            sequence,
        }
    }

    /// Copy of these details carrying a new score
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            start_time: self.start_time,
            score,
            sequence: self.sequence,
        }
    }
}

/// One row of a scoreboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
    /// When the match was started
    pub match_time: NaiveDateTime,
    /// Home goals
    pub home_score: u32,
    /// Away goals
    pub away_score: u32,
}

impl Match {
    /// Build a summary row
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        match_time: NaiveDateTime,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            match_time,
            home_score,
            away_score,
        }
    }

    /// Flatten a board entry into a summary row
    pub fn from_entry(pair: &TeamPair, details: &MatchDetails) -> Self {
        Self {
            home_team: pair.home_team.clone(),
            away_team: pair.away_team.clone(),
            match_time: details.start_time,
            home_score: details.score.home_score,
            away_score: details.score.away_score,
        }
    }

    /// Goals scored by both sides
    pub fn total_score(&self) -> u64 {
        Score::new(self.home_score, self.away_score).total()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
