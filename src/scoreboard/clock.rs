//! Time source for the scoreboard.
//!
//! Start times are taken from a [`ScoreboardClock`] rather than read
//! directly, so hosts and tests can pin the time.

use chrono::{Duration, Local, NaiveDateTime};
use std::sync::{Mutex, PoisonError};

/// Provides the wall-clock time recorded when a match starts.
pub trait ScoreboardClock: Send + Sync {
    /// Current local date-time
    fn fetch_time(&self) -> NaiveDateTime;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ScoreboardClock for SystemClock {
    fn fetch_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that returns a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Clock stopped at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Parse an ISO-8601 local date-time such as `2024-03-01T21:35:30`.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map(Self::new)
    }

    /// Move the clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl ScoreboardClock for FixedClock {
    fn fetch_time(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::parse("2024-03-01T21:35:30").unwrap();
        assert_eq!(clock.fetch_time().to_string(), "2024-03-01 21:35:30");

        clock.advance(Duration::minutes(1));
        assert_eq!(clock.fetch_time().to_string(), "2024-03-01 21:36:30");

        clock.set(NaiveDateTime::parse_from_str("2024-03-02T00:00:00", "%Y-%m-%dT%H:%M:%S").unwrap());
        assert_eq!(clock.fetch_time().to_string(), "2024-03-02 00:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.fetch_time();
        let second = clock.fetch_time();
        assert!(second >= first);
    }
}
