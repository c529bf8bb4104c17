//! Live match scoreboard.
//!
//! The scoreboard keeps the running matches of a tournament in memory: each
//! match is started at 0-0, receives absolute score updates, and disappears
//! when finished. Nothing is persisted and finished matches are not traced.
//!
//! # Example
//!
//! ```
//! use worldcup_scoreboard::scoreboard::{new_scoreboard, Scoreboard};
//!
//! let scoreboard = new_scoreboard();
//! scoreboard.start_match("Mexico", "Canada").unwrap();
//! scoreboard.start_match("Spain", "Brazil").unwrap();
//! scoreboard.update_score("Spain", "Brazil", 10, 2).unwrap();
//!
//! let summary = scoreboard.summary();
//! assert_eq!(summary[0].to_string(), "Spain 10 - Brazil 2");
//! assert_eq!(summary[1].to_string(), "Mexico 0 - Canada 0");
//! ```

pub mod audit;
pub mod cache;
pub mod clock;
pub mod errors;
pub mod memory;
pub mod model;

pub use audit::ScoreboardAudit;
pub use cache::ScoreboardCache;
pub use clock::{FixedClock, ScoreboardClock, SystemClock};
pub use errors::{ScoreboardError, ScoreboardResult};
pub use memory::InMemoryScoreboard;
pub use model::{Match, MatchDetails, Score, TeamPair};

/// Operations offered by a scoreboard.
pub trait Scoreboard: Send + Sync {
    /// Register a new match at 0-0.
    ///
    /// # Errors
    /// * `Input` - a team name is blank.
    /// * `Consistency` - the match is already live.
    fn start_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()>;

    /// Record the absolute score of a live match.
    ///
    /// # Errors
    /// * `Input` - a team name is blank.
    /// * `Consistency` - the match is not live, the score is unchanged, or
    ///   either side would go down.
    fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> ScoreboardResult<()>;

    /// Remove a live match from the board.
    ///
    /// # Errors
    /// * `Input` - a team name is blank.
    /// * `Consistency` - the match is not live.
    fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()>;

    /// Live matches ordered by total score, most recently started first on ties.
    fn summary(&self) -> Vec<Match>;
}

impl<S: Scoreboard + ?Sized> Scoreboard for Box<S> {
    fn start_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        (**self).start_match(home_team, away_team)
    }

    fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> ScoreboardResult<()> {
        (**self).update_score(home_team, away_team, home_score, away_score)
    }

    fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        (**self).finish_match(home_team, away_team)
    }

    fn summary(&self) -> Vec<Match> {
        (**self).summary()
    }
}

/// Create a scoreboard with its own empty board and the system clock.
pub fn new_scoreboard() -> Box<dyn Scoreboard> {
    Box::new(InMemoryScoreboard::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_returns_empty_board() {
        let scoreboard = new_scoreboard();
        assert!(scoreboard.summary().is_empty());
    }

    #[test]
    fn test_factory_boards_are_independent() {
        let first = new_scoreboard();
        let second = new_scoreboard();
        first.start_match("Mexico", "Canada").unwrap();
        assert!(second.summary().is_empty());
        assert!(second.start_match("Mexico", "Canada").is_ok());
    }

    #[test]
    fn test_boxed_scoreboard_forwards() {
        let scoreboard: Box<dyn Scoreboard> = new_scoreboard();
        let boxed: Box<Box<dyn Scoreboard>> = Box::new(scoreboard);
        boxed.start_match("Spain", "Brazil").unwrap();
        boxed.update_score("Spain", "Brazil", 1, 0).unwrap();
        assert_eq!(boxed.summary()[0].home_score, 1);
        boxed.finish_match("Spain", "Brazil").unwrap();
        assert!(boxed.summary().is_empty());
    }
}
