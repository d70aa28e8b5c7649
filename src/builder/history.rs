//! Builder for preloaded history stores.

use crate::builder::error::BuildError;
use crate::core::{Entry, HistoryStore};

/// Builder for constructing a history store from an existing sequence of
/// entries and a starting cursor.
///
/// # Example
///
/// ```
/// use retrace::builder::HistoryBuilder;
/// use retrace::core::Entry;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Frame(u8);
///
/// impl Entry for Frame {}
///
/// let store = HistoryBuilder::new()
///     .entries(vec![Frame(0), Frame(1), Frame(2)])
///     .cursor(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(store.current(), &Frame(1));
/// assert_eq!(store.len(), 3);
/// ```
pub struct HistoryBuilder<E: Entry> {
    entries: Vec<E>,
    cursor: Option<usize>,
}

impl<E: Entry> HistoryBuilder<E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Start the history from a single initial entry, replacing any
    /// entries added so far.
    pub fn initial(mut self, entry: E) -> Self {
        self.entries = vec![entry];
        self
    }

    /// Append one entry to the preloaded history.
    pub fn push(mut self, entry: E) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append several entries at once.
    pub fn entries(mut self, entries: Vec<E>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Set the starting cursor. Defaults to the first entry.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Build the store.
    /// Returns an error if no entries were given or the cursor is out of range.
    pub fn build(self) -> Result<HistoryStore<E>, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::EmptyHistory);
        }

        let len = self.entries.len();
        let cursor = self.cursor.unwrap_or(0);
        if cursor >= len {
            return Err(BuildError::CursorOutOfRange { cursor, len });
        }

        Ok(HistoryStore::from_parts(self.entries, cursor))
    }
}

impl<E: Entry> Default for HistoryBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
