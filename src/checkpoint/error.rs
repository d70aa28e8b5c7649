//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while encoding, decoding or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint: {0}")]
    Encode(String),

    #[error("Could not decode checkpoint: {0}")]
    Decode(String),

    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Checkpoint holds no entries")]
    Empty,

    /// The stored cursor does not name one of the stored entries
    #[error("Checkpoint cursor {cursor} is out of range for {len} entries")]
    CursorOutOfRange { cursor: usize, len: usize },
}
