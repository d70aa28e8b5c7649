//! Tagged actions over a history store.
//!
//! Callers that receive events (key presses, parsed commands) describe the
//! requested change as a [`HistoryAction`] and hand it to [`reduce`].

use super::entry::Entry;
use super::error::HistoryError;
use super::history::HistoryStore;

/// The closed set of transitions a history store accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryAction<E: Entry> {
    /// Append a new entry, truncating any abandoned branch
    Append { entry: E },

    /// Move the cursor to an existing entry
    Seek { index: usize },
}

/// Apply `action` to `store`, returning the next store.
///
/// # Example
///
/// ```rust
/// use retrace::core::{reduce, Entry, HistoryAction, HistoryStore};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Page(u8);
///
/// impl Entry for Page {}
///
/// let store = HistoryStore::new(Page(0));
/// let store = reduce(&store, HistoryAction::Append { entry: Page(1) }).unwrap();
/// let store = reduce(&store, HistoryAction::Seek { index: 0 }).unwrap();
/// assert_eq!(store.current(), &Page(0));
///
/// assert!(reduce(&store, HistoryAction::Seek { index: 5 }).is_err());
/// ```
pub fn reduce<E: Entry>(
    store: &HistoryStore<E>,
    action: HistoryAction<E>,
) -> Result<HistoryStore<E>, HistoryError> {
    match action {
        HistoryAction::Append { entry } => Ok(store.append(entry)),
        HistoryAction::Seek { index } => store.seek(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Word(String);

    impl Entry for Word {}

    fn w(s: &str) -> Word {
        Word(s.to_string())
    }

    #[test]
    fn append_action_appends() {
        let store = HistoryStore::new(w("a"));
        let next = reduce(&store, HistoryAction::Append { entry: w("b") }).unwrap();

        assert_eq!(next.entries(), &[w("a"), w("b")]);
        assert_eq!(next.cursor(), 1);
    }

    #[test]
    fn seek_action_seeks() {
        let store = HistoryStore::new(w("a")).append(w("b")).append(w("c"));
        let next = reduce(&store, HistoryAction::Seek { index: 0 }).unwrap();

        assert_eq!(next.current(), &w("a"));
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn seek_action_rejects_out_of_range() {
        let store = HistoryStore::new(w("a"));
        let err = reduce(&store, HistoryAction::Seek { index: 1 }).unwrap_err();

        assert_eq!(err, HistoryError::OutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn action_sequence_matches_direct_calls() {
        let actions = vec![
            HistoryAction::Append { entry: w("b") },
            HistoryAction::Append { entry: w("c") },
            HistoryAction::Seek { index: 1 },
            HistoryAction::Append { entry: w("d") },
        ];

        let reduced = actions
            .into_iter()
            .try_fold(HistoryStore::new(w("a")), |s, a| reduce(&s, a))
            .unwrap();

        let direct = HistoryStore::new(w("a"))
            .append(w("b"))
            .append(w("c"))
            .seek(1)
            .unwrap()
            .append(w("d"));

        assert_eq!(reduced, direct);
    }
}
