//! Retrace: a pure functional history store
//!
//! Retrace keeps an ordered history of immutable entries and a cursor into
//! it. Appending after a rewind discards the abandoned future, giving
//! undo/redo with a single active branch. The core is a set of pure
//! transitions on values; the `session` module is the imperative shell
//! that owns the one live instance.
//!
//! # Core Concepts
//!
//! - **Entry**: Immutable snapshot type via the `Entry` trait
//! - **HistoryStore**: Entries plus cursor, with `append` and `seek`
//! - **HistoryAction**: Tagged transitions dispatched by `reduce`
//! - **Checkpoint**: Versioned, serializable copy of a store
//!
//! The `tictactoe` module is the first consumer: boards are the entries.
//!
//! # Example
//!
//! ```rust
//! use retrace::tictactoe::{evaluate, Game, GameStatus, Mark};
//!
//! let game = Game::default()
//!     .select_square(0).unwrap()   // X
//!     .select_square(3).unwrap()   // O
//!     .select_square(4).unwrap();  // X
//!
//! // Take back O's move and play somewhere else
//! let game = game.go_to_step(1).unwrap().select_square(8).unwrap();
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
//! assert_eq!(evaluate(game.current_board()).winner, None);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod command;
pub mod config;
pub mod core;
pub mod session;
pub mod tictactoe;

// Re-export commonly used types
pub use crate::core::{reduce, Entry, Guard, HistoryAction, HistoryError, HistoryStore};
