//! MessagePack implementation of the snapshot repository.
//!
//! This adapter implements the SnapshotRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs, io::ErrorKind, path::Path};

use crate::{Result, agents::ValueSnapshot, error::Error, ports::SnapshotRepository};

/// MessagePack-based snapshot repository backed by the file system.
///
/// # Examples
///
/// ```no_run
/// use gridplay::adapters::MsgPackRepository;
/// use gridplay::ports::SnapshotRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// if let Some(snapshot) = repo.load(Path::new("values.msgpack"))? {
///     println!("{} games trained", snapshot.games_trained);
/// }
/// # Ok::<(), gridplay::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotRepository for MsgPackRepository {
    fn save(&self, snapshot: &ValueSnapshot, path: &Path) -> Result<()> {
        let bytes = snapshot.to_bytes()?;
        fs::write(path, bytes).map_err(|source| Error::Io {
            operation: format!("write value snapshot {}", path.display()),
            source,
        })
    }

    fn load(&self, path: &Path) -> Result<Option<ValueSnapshot>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("read value snapshot {}", path.display()),
                    source,
                });
            }
        };
        ValueSnapshot::from_bytes(&bytes, &path.display().to_string()).map(Some)
    }
}
