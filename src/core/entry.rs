//! Core Entry trait for history snapshots.
//!
//! Every value stored in a history must implement this trait. Entries are
//! immutable snapshots, so the trait only exposes pure inspection methods.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for history entries.
///
/// An entry is one immutable snapshot of domain state. The store never
/// mutates an entry after it has been appended; new states are new values.
///
/// # Required Traits
///
/// - `Clone`: Entries are copied into each new history value
/// - `PartialEq`: Entries must be comparable for tests and diagnostics
/// - `Debug`: Entries must be debuggable for logging
/// - `Serialize` + `Deserialize`: Entries must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use retrace::core::Entry;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter(u32);
///
/// impl Entry for Counter {
///     fn summary(&self) -> String {
///         format!("count={}", self.0)
///     }
/// }
///
/// assert_eq!(Counter(3).summary(), "count=3");
/// ```
pub trait Entry:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short human readable description used in log events.
    ///
    /// Default implementation uses the `Debug` representation.
    fn summary(&self) -> String {
        format!("{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Note(String);

    impl Entry for Note {}

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Score(u8);

    impl Entry for Score {
        fn summary(&self) -> String {
            format!("score {}", self.0)
        }
    }

    #[test]
    fn default_summary_uses_debug() {
        let note = Note("hello".to_string());
        assert_eq!(note.summary(), "Note(\"hello\")");
    }

    #[test]
    fn summary_can_be_overridden() {
        assert_eq!(Score(7).summary(), "score 7");
    }

    #[test]
    fn entry_serializes_correctly() {
        let entry = Score(42);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
