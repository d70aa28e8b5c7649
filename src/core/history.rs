//! Linear history with a cursor and branch truncation.
//!
//! The store is an immutable value: every transition returns a new store
//! and leaves the original untouched, following the same rules as the
//! rest of the pure core.

use super::entry::Entry;
use super::error::HistoryError;
use super::guard::Guard;

/// Ordered sequence of entries plus a cursor naming the current one.
///
/// Invariants:
/// - the history is never empty (index 0 is the initial entry)
/// - `cursor < len()`
///
/// Appending after a rewind discards every entry beyond the cursor, so only
/// one branch is ever active.
///
/// # Example
///
/// ```rust
/// use retrace::core::{Entry, HistoryStore};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Step(u8);
///
/// impl Entry for Step {}
///
/// let store = HistoryStore::new(Step(0))
///     .append(Step(1))
///     .append(Step(2));
/// assert_eq!(store.len(), 3);
///
/// // Rewind, then take a different action: Step(2) is discarded
/// let store = store.seek(1).unwrap().append(Step(9));
/// assert_eq!(store.entries(), &[Step(0), Step(1), Step(9)]);
/// assert_eq!(store.current(), &Step(9));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStore<E: Entry> {
    entries: Vec<E>,
    cursor: usize,
}

impl<E: Entry> HistoryStore<E> {
    /// Create a history holding only the initial entry, with the cursor on it.
    pub fn new(initial: E) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Assemble a store from parts that the caller has already validated.
    pub(crate) fn from_parts(entries: Vec<E>, cursor: usize) -> Self {
        debug_assert!(cursor < entries.len());
        Self { entries, cursor }
    }

    /// Append an entry, returning a new history.
    ///
    /// When the cursor sits on the latest entry the new entry is pushed.
    /// Otherwise the history is first truncated to `[0..=cursor]`. In both
    /// cases the cursor moves to the appended entry. Always succeeds.
    pub fn append(&self, entry: E) -> Self {
        let keep = self.cursor + 1;
        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);

        let discarded = self.entries.len() - keep;
        if discarded > 0 {
            tracing::debug!(
                cursor = self.cursor,
                discarded,
                "truncating abandoned branch"
            );
        }

        tracing::debug!(index = keep, entry = %entry.summary(), "appending entry");
        entries.push(entry);

        Self {
            cursor: entries.len() - 1,
            entries,
        }
    }

    /// Append only if `guard` accepts the current entry.
    ///
    /// A rejected append returns [`HistoryError::GuardRejected`] and the
    /// store is unchanged.
    pub fn append_if(&self, entry: E, guard: &Guard<E>) -> Result<Self, HistoryError> {
        if !guard.check(self.current()) {
            tracing::debug!(cursor = self.cursor, "guard rejected append");
            return Err(HistoryError::GuardRejected {
                cursor: self.cursor,
            });
        }
        Ok(self.append(entry))
    }

    /// Move the cursor to `index`, returning a new history.
    ///
    /// Returns [`HistoryError::OutOfRange`] when `index >= len()`. Seeking
    /// to the current cursor yields an equal store.
    pub fn seek(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.entries.len() {
            tracing::warn!(index, len = self.entries.len(), "rejected seek");
            return Err(HistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        tracing::debug!(from = self.cursor, to = index, "seek");
        Ok(Self {
            entries: self.entries.clone(),
            cursor: index,
        })
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &E {
        &self.entries[self.cursor]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cursor is on the most recent entry (nothing was rewound).
    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.entries.len() - 1
    }

    pub fn initial(&self) -> &E {
        &self.entries[0]
    }

    pub fn latest(&self) -> &E {
        &self.entries[self.entries.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Snap(u32);

    impl Entry for Snap {}

    fn store_of(n: u32) -> HistoryStore<Snap> {
        (1..n).fold(HistoryStore::new(Snap(0)), |s, i| s.append(Snap(i)))
    }

    #[test]
    fn new_history_has_one_entry() {
        let store = HistoryStore::new(Snap(0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.current(), &Snap(0));
        assert!(store.is_at_latest());
        assert!(!store.is_empty());
    }

    #[test]
    fn append_at_end_pushes() {
        let store = store_of(3);
        let next = store.append(Snap(3));

        assert_eq!(next.len(), 4);
        assert_eq!(&next.entries()[..3], store.entries());
        assert_eq!(next.cursor(), 3);
        assert_eq!(next.current(), &Snap(3));
    }

    #[test]
    fn append_is_immutable() {
        let store = store_of(2);
        let _next = store.append(Snap(99));

        assert_eq!(store.len(), 2);
        assert_eq!(store.current(), &Snap(1));
    }

    #[test]
    fn append_after_rewind_truncates() {
        let store = store_of(5).seek(1).unwrap();
        let next = store.append(Snap(42));

        assert_eq!(next.entries(), &[Snap(0), Snap(1), Snap(42)]);
        assert_eq!(next.cursor(), 2);
    }

    #[test]
    fn append_after_rewind_to_start() {
        let next = store_of(4).seek(0).unwrap().append(Snap(7));

        assert_eq!(next.entries(), &[Snap(0), Snap(7)]);
        assert!(next.is_at_latest());
    }

    #[test]
    fn seek_moves_cursor() {
        let store = store_of(4).seek(2).unwrap();
        assert_eq!(store.cursor(), 2);
        assert_eq!(store.current(), &Snap(2));
        assert_eq!(store.len(), 4);
        assert!(!store.is_at_latest());
    }

    #[test]
    fn seek_to_current_is_noop() {
        let store = store_of(3);
        let same = store.seek(store.cursor()).unwrap();
        assert_eq!(store, same);
    }

    #[test]
    fn seek_out_of_range_fails() {
        let store = store_of(3);
        let err = store.seek(3).unwrap_err();

        assert_eq!(err, HistoryError::OutOfRange { index: 3, len: 3 });
        assert_eq!(store.cursor(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn append_if_respects_guard() {
        let store = store_of(2);
        let below_five = Guard::new(|s: &Snap| s.0 < 5);
        let never = Guard::new(|_: &Snap| false);

        let next = store.append_if(Snap(2), &below_five).unwrap();
        assert_eq!(next.len(), 3);

        let err = store.append_if(Snap(2), &never).unwrap_err();
        assert_eq!(err, HistoryError::GuardRejected { cursor: 1 });
    }

    #[test]
    fn initial_and_latest() {
        let store = store_of(4).seek(1).unwrap();
        assert_eq!(store.initial(), &Snap(0));
        assert_eq!(store.latest(), &Snap(3));
    }
}
