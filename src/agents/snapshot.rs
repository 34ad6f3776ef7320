//! Serialized form of a value-function agent's learned table.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, board::Player, transposition::TranspositionCache};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSnapshot {
    pub version: u32,
    pub side: Player,
    pub games_trained: usize,
    pub values: TranspositionCache<f64>,
}

impl ValueSnapshot {
    pub const VERSION: u32 = 1;

    pub fn new(side: Player, games_trained: usize, values: TranspositionCache<f64>) -> Self {
        Self {
            version: Self::VERSION,
            side,
            games_trained,
            values,
        }
    }

    /// MessagePack encoding used by the repositories.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| Error::SerializationContext {
            operation: "serialize value snapshot to MessagePack".to_string(),
            message: e.to_string(),
        })
    }

    /// Decode and version-check a snapshot read from `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the bytes are not a snapshot or
    /// carry an unsupported version.
    pub fn from_bytes(bytes: &[u8], origin: &str) -> Result<Self> {
        let snapshot: ValueSnapshot =
            rmp_serde::from_slice(bytes).map_err(|e| Error::Persistence {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        if snapshot.version != Self::VERSION {
            return Err(Error::Persistence {
                origin: origin.to_string(),
                message: format!(
                    "unsupported snapshot version {}, expected {}",
                    snapshot.version,
                    Self::VERSION
                ),
            });
        }
        Ok(snapshot)
    }
}
