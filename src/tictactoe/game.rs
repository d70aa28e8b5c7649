//! A tic-tac-toe game on top of the history store.
//!
//! The game owns no state besides its history and the first player. Whose
//! turn it is follows from the cursor, so rewinding the history also
//! rewinds the turn.

use super::board::{Board, Mark, SQUARES};
use super::evaluate::{evaluate, Evaluation};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{Guard, HistoryError, HistoryStore};
use std::fmt;
use thiserror::Error;

/// Reasons a move or navigation request is refused.
///
/// A refused request never changes the game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Square {square} is off the board (squares are 0-8)")]
    SquareOutOfRange { square: usize },

    #[error("Square {square} is already taken")]
    SquareOccupied { square: usize },

    #[error("The game is over")]
    GameOver,

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// What the status line shows for the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {mark}"),
            GameStatus::Draw => write!(f, "Scratch: Cat's game"),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// One line of the navigable move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

/// Guard accepting moves only while the board is undecided.
fn accepting_moves() -> Guard<Board> {
    Guard::new(|board: &Board| evaluate(board).is_in_progress())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    history: HistoryStore<Board>,
    first: Mark,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl Game {
    /// Start a game on an empty board with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            history: HistoryStore::new(Board::empty()),
            first,
        }
    }

    /// Continue from an existing history.
    pub fn from_history(history: HistoryStore<Board>, first: Mark) -> Self {
        Self { history, first }
    }

    /// Resume from a checkpoint.
    ///
    /// The first player is read back from the first recorded move; `fallback`
    /// is used only when no move has been made yet.
    pub fn from_checkpoint(
        checkpoint: Checkpoint<Board>,
        fallback: Mark,
    ) -> Result<Self, CheckpointError> {
        let history = checkpoint.restore()?;
        let first = first_mover(&history).unwrap_or(fallback);
        Ok(Self { history, first })
    }

    pub fn checkpoint(&self) -> Checkpoint<Board> {
        Checkpoint::capture(&self.history)
    }

    pub fn history(&self) -> &HistoryStore<Board> {
        &self.history
    }

    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    pub fn first_player(&self) -> Mark {
        self.first
    }

    /// Index of the board on display.
    pub fn step(&self) -> usize {
        self.history.cursor()
    }

    /// The first player moves on even steps, the opponent on odd ones.
    pub fn next_player(&self) -> Mark {
        if self.history.cursor() % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }

    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    pub fn status(&self) -> GameStatus {
        let eval = self.evaluation();
        match eval.winner {
            Some(mark) => GameStatus::Winner(mark),
            None if eval.is_draw => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Place the next player's mark on `square`.
    ///
    /// If the cursor was rewound, every later board is discarded first.
    pub fn select_square(&self, square: usize) -> Result<Self, GameError> {
        if square >= SQUARES {
            return Err(GameError::SquareOutOfRange { square });
        }

        let board = self.current_board();
        let mark = self.next_player();

        // A finished board reports GameOver even when the square is taken
        let history = self
            .history
            .append_if(board.with_mark(square, mark), &accepting_moves())
            .map_err(|e| match e {
                HistoryError::GuardRejected { .. } => GameError::GameOver,
                other => GameError::History(other),
            })?;
        if board.is_occupied(square) {
            return Err(GameError::SquareOccupied { square });
        }

        tracing::info!(%mark, square, step = self.step() + 1, "move");
        Ok(Self {
            history,
            first: self.first,
        })
    }

    /// Show the board at `step` without discarding anything.
    pub fn go_to_step(&self, step: usize) -> Result<Self, GameError> {
        Ok(Self {
            history: self.history.seek(step)?,
            first: self.first,
        })
    }

    /// Labels for every recorded step, oldest first.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let current = self.history.cursor();
        (0..self.history.len())
            .map(|step| MoveEntry {
                step,
                label: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{step}")
                },
                is_current: step == current,
            })
            .collect()
    }
}

/// The mark placed by the first recorded move, if there is one.
fn first_mover(history: &HistoryStore<Board>) -> Option<Mark> {
    let entries = history.entries();
    let (before, after) = (entries.first()?, entries.get(1)?);
    (0..SQUARES).find_map(|i| match (before.get(i), after.get(i)) {
        (None, Some(mark)) => Some(mark),
        _ => None,
    })
}
