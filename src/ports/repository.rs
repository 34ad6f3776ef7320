//! Repository port for value table persistence.

use std::path::Path;

use crate::{Result, agents::ValueSnapshot};

/// Port for persisting and loading value-function snapshots.
///
/// # Examples
///
/// ```no_run
/// use gridplay::adapters::MsgPackRepository;
/// use gridplay::agents::ValueSnapshot;
/// use gridplay::board::Player;
/// use gridplay::ports::SnapshotRepository;
/// use gridplay::transposition::TranspositionCache;
/// use std::path::Path;
///
/// let repo = MsgPackRepository::new();
/// let snapshot = ValueSnapshot::new(Player::X, 0, TranspositionCache::new());
/// repo.save(&snapshot, Path::new("values.msgpack"))?;
/// let loaded = repo.load(Path::new("values.msgpack"))?;
/// assert!(loaded.is_some());
/// # Ok::<(), gridplay::Error>(())
/// ```
pub trait SnapshotRepository {
    /// Save a snapshot to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save(&self, snapshot: &ValueSnapshot, path: &Path) -> Result<()>;

    /// Load a snapshot, `Ok(None)` if nothing is stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Persistence`] if the stored bytes do not
    /// decode into a supported snapshot, or an I/O error if the location
    /// exists but cannot be read.
    fn load(&self, path: &Path) -> Result<Option<ValueSnapshot>>;
}
