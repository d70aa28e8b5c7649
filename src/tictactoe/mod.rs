//! Tic-tac-toe built on the history store.
//!
//! Boards are the history entries. The game layer adds turn order, move
//! validation and the status/move-list views a front end renders.

pub mod board;
pub mod evaluate;
pub mod game;

pub use board::{Board, Mark, SQUARES};
pub use evaluate::{evaluate, winner, Evaluation, LINES};
pub use game::{Game, GameError, GameStatus, MoveEntry};
