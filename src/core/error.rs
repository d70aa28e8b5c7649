//! History store error types.

use thiserror::Error;

/// Errors returned by history transitions.
///
/// A rejected transition never changes the store it was called on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Seek target is not a valid index into the history
    #[error("Entry {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// A guard refused to let the entry be appended
    #[error("Guard rejected append at entry {cursor}")]
    GuardRejected { cursor: usize },
}
