//! Checkpoint and resume for history stores.
//!
//! A checkpoint is a serializable copy of a store's entries and cursor,
//! tagged with a format version, an id and a capture time. Restoring a
//! checkpoint re-checks the store invariants, so a hand-edited or
//! truncated file cannot produce a store with a dangling cursor.

use crate::core::{Entry, HistoryStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a history store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<E: Entry> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// All entries, oldest first
    pub entries: Vec<E>,

    /// Index of the current entry
    pub cursor: usize,
}

impl<E: Entry> Checkpoint<E> {
    /// Capture the given store.
    pub fn capture(store: &HistoryStore<E>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            entries: store.entries().to_vec(),
            cursor: store.cursor(),
        };
        tracing::debug!(
            id = %checkpoint.id,
            entries = checkpoint.entries.len(),
            cursor = checkpoint.cursor,
            "captured checkpoint"
        );
        checkpoint
    }

    /// Check version and store invariants without consuming the checkpoint.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.entries.is_empty() {
            return Err(CheckpointError::Empty);
        }
        if self.cursor >= self.entries.len() {
            return Err(CheckpointError::CursorOutOfRange {
                cursor: self.cursor,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Rebuild the store this checkpoint was captured from.
    pub fn restore(self) -> Result<HistoryStore<E>, CheckpointError> {
        self.validate()?;
        tracing::debug!(id = %self.id, "restoring checkpoint");
        Ok(HistoryStore::from_parts(self.entries, self.cursor))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize from JSON. Validation happens on [`Checkpoint::restore`].
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize from the compact binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))
    }
}
