//! Shared in-memory store of live matches.

use super::model::{MatchDetails, TeamPair};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Board contents guarded by the cache lock.
#[derive(Debug, Default)]
pub struct CacheState {
    entries: HashMap<TeamPair, MatchDetails>,
    next_sequence: u64,
}

impl CacheState {
    /// Whether the match is live
    pub fn has_entry(&self, pair: &TeamPair) -> bool {
        self.entries.contains_key(pair)
    }

    /// Live entry for the match
    pub fn get(&self, pair: &TeamPair) -> Option<&MatchDetails> {
        self.entries.get(pair)
    }

    /// Insert or replace an entry
    pub fn put(&mut self, pair: TeamPair, details: MatchDetails) {
        self.entries.insert(pair, details);
    }

    /// Remove an entry, returning it
    pub fn remove(&mut self, pair: &TeamPair) -> Option<MatchDetails> {
        self.entries.remove(pair)
    }

    /// Hand out the next start sequence number.
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Number of live matches
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no match is live
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&TeamPair, &MatchDetails)> {
        self.entries.iter()
    }
}

/// Cloneable handle to a live board.
///
/// Clones share the same underlying state. Reads may run concurrently;
/// writes are serialized, and a write closure sees and mutates the board
/// atomically, so check-then-act sequences cannot interleave.
#[derive(Debug, Clone, Default)]
pub struct ScoreboardCache {
    state: Arc<RwLock<CacheState>>,
}

impl ScoreboardCache {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with shared access to the board.
    pub fn read<R>(&self, f: impl FnOnce(&CacheState) -> R) -> R {
        // Writers validate before mutating; poisoned state is still coherent.
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the board.
    pub fn write<R>(&self, f: impl FnOnce(&mut CacheState) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Deep copy of the current entries.
    pub fn snapshot(&self) -> HashMap<TeamPair, MatchDetails> {
        self.read(|state| state.entries.clone())
    }

    /// Whether the match is live
    pub fn has_entry(&self, pair: &TeamPair) -> bool {
        self.read(|state| state.has_entry(pair))
    }

    /// Number of live matches
    pub fn len(&self) -> usize {
        self.read(CacheState::len)
    }

    /// Whether no match is live
    pub fn is_empty(&self) -> bool {
        self.read(CacheState::is_empty)
    }

    /// Drop every live match.
    pub fn clear(&self) {
        self.write(|state| state.entries.clear());
    }
}
