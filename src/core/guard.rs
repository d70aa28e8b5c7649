//! Guard predicates for controlling appends.
//!
//! Guards are pure boolean functions over the current entry. They let a
//! caller express "only accept a new entry while the current one allows it"
//! without the store knowing anything about the domain.

use super::entry::Entry;
use std::marker::PhantomData;

/// Pure predicate evaluated against the current entry before an append.
///
/// # Example
///
/// ```rust
/// use retrace::core::{Entry, Guard};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Tally(u32);
///
/// impl Entry for Tally {}
///
/// // Only allow appends while the tally is below ten
/// let below_ten = Guard::new(|t: &Tally| t.0 < 10);
///
/// assert!(below_ten.check(&Tally(3)));
/// assert!(!below_ten.check(&Tally(10)));
/// ```
pub struct Guard<E: Entry> {
    predicate: Box<dyn Fn(&E) -> bool + Send + Sync>,
    _phantom: PhantomData<E>,
}

impl<E: Entry> Guard<E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows an append on top of this entry.
    pub fn check(&self, entry: &E) -> bool {
        (self.predicate)(entry)
    }
}

impl<E: Entry> std::fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Open,
        Closed,
    }

    impl Entry for Phase {}

    #[test]
    fn guard_allows_matching_entries() {
        let guard = Guard::new(|p: &Phase| matches!(p, Phase::Open));

        assert!(guard.check(&Phase::Open));
        assert!(!guard.check(&Phase::Closed));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|p: &Phase| matches!(p, Phase::Closed));

        let result1 = guard.check(&Phase::Closed);
        let result2 = guard.check(&Phase::Closed);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_capture_state() {
        let limit = 3usize;
        let guard = Guard::new(move |p: &Phase| format!("{p:?}").len() > limit);

        assert!(guard.check(&Phase::Open));
        assert!(guard.check(&Phase::Closed));
    }
}
