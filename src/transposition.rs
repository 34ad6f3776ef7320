//! Position-keyed cache shared by the search and learning agents

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{board::Board, types::CanonicalKey};

/// Maps a board's [`CanonicalKey`] to a value.
///
/// Every lookup goes through [`Board::transposition_key`], so on square boards
/// a position and its rotations and reflections share one entry. Entries are
/// created lazily and only removed by [`TranspositionCache::clear`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranspositionCache<V> {
    entries: HashMap<CanonicalKey, V>,
}

impl<V> TranspositionCache<V> {
    pub fn new() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
        }
    }

    /// Stored value for `board`, inserting `default` first if absent.
    pub fn get_or_insert<B: Board>(&mut self, board: &B, default: V) -> &mut V {
        self.entries
            .entry(board.transposition_key())
            .or_insert(default)
    }

    pub fn get<B: Board>(&self, board: &B) -> Option<&V> {
        self.entries.get(&board.transposition_key())
    }

    /// Store `value` for `board`, returning the previous value.
    pub fn set<B: Board>(&mut self, board: &B, value: V) -> Option<V> {
        self.entries.insert(board.transposition_key(), value)
    }

    pub fn contains<B: Board>(&self, board: &B) -> bool {
        self.entries.contains_key(&board.transposition_key())
    }

    pub fn get_by_key(&self, key: &CanonicalKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &V)> {
        self.entries.iter()
    }
}

impl<V> Default for TranspositionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
