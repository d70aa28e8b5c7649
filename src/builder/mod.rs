//! Builder API for preloaded history stores.
//!
//! `HistoryStore::new` always starts from a single entry. Resuming a
//! session or replaying a recorded game needs a store that already holds
//! several entries and a cursor somewhere inside them; this module builds
//! those with validation instead of panics.

pub mod error;
pub mod history;

pub use error::BuildError;
pub use history::HistoryBuilder;
