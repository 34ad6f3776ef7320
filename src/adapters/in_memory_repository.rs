//! In-memory snapshot repository for testing.
//!
//! This adapter keeps encoded snapshots in a shared map, enabling fast tests
//! without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, agents::ValueSnapshot, ports::SnapshotRepository};

/// In-memory repository for testing.
///
/// Snapshots are stored as the same MessagePack bytes the file adapter
/// writes, so decoding failures surface the same way.
///
/// # Examples
///
/// ```
/// use gridplay::adapters::InMemoryRepository;
/// use gridplay::agents::ValueSnapshot;
/// use gridplay::board::Player;
/// use gridplay::ports::SnapshotRepository;
/// use gridplay::transposition::TranspositionCache;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let snapshot = ValueSnapshot::new(Player::X, 0, TranspositionCache::new());
/// repo.save(&snapshot, Path::new("values"))?;
/// assert_eq!(repo.load(Path::new("values"))?, Some(snapshot));
/// # Ok::<(), gridplay::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the number of snapshots currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Clear all stored snapshots.
    pub fn clear(&self) {
        self.storage().clear();
    }

    /// Check if a snapshot exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&Self::key(path))
    }

    /// Store raw bytes at `path`, bypassing encoding.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage().insert(Self::key(path), bytes);
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for InMemoryRepository {
    fn save(&self, snapshot: &ValueSnapshot, path: &Path) -> Result<()> {
        let bytes = snapshot.to_bytes()?;
        self.storage().insert(Self::key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<ValueSnapshot>> {
        let key = Self::key(path);
        let storage = self.storage();
        match storage.get(&key) {
            Some(bytes) => ValueSnapshot::from_bytes(bytes, &key).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, board::Player, transposition::TranspositionCache};

    fn snapshot() -> ValueSnapshot {
        ValueSnapshot::new(Player::X, 5, TranspositionCache::new())
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let path = Path::new("values");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&snapshot(), path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));
        assert_eq!(repo.load(path).unwrap(), Some(snapshot()));
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_bytes_are_persistence_error() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(Path::new("bad"), vec![0xc1, 0x00]);
        let err = repo.load(Path::new("bad")).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&snapshot(), Path::new("shared")).unwrap();
        assert_eq!(repo2.count(), 1);

        repo2.clear();
        assert_eq!(repo1.count(), 0);
    }
}
