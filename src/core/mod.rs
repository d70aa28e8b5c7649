//! Core history store types and logic.
//!
//! This module contains the pure functional core:
//! - Entry definitions via the `Entry` trait
//! - The `HistoryStore` value with append and seek transitions
//! - Tagged `HistoryAction`s and the `reduce` dispatcher
//! - Guard predicates for conditional appends
//!
//! Nothing here performs I/O. Log events are emitted through `tracing`
//! and are inert unless the host installs a subscriber.

mod action;
mod entry;
mod error;
mod guard;
mod history;

pub use action::{reduce, HistoryAction};
pub use entry::Entry;
pub use error::HistoryError;
pub use guard::Guard;
pub use history::HistoryStore;
