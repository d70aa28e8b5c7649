//! Build errors for history builders.

use thiserror::Error;

/// Errors that can occur when building a history store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No entries provided. Call .initial(entry) or .entries(vec) before .build()")]
    EmptyHistory,

    #[error("Cursor {cursor} is out of range for a history of {len} entries")]
    CursorOutOfRange { cursor: usize, len: usize },
}
