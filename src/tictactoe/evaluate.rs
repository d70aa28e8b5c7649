//! Win and draw detection.

use super::board::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Square indices of every winning line on the 3x3 board.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Outcome of inspecting a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub winner: Option<Mark>,
    pub is_draw: bool,
}

impl Evaluation {
    /// Neither a win nor a draw: moves are still accepted.
    pub fn is_in_progress(&self) -> bool {
        self.winner.is_none() && !self.is_draw
    }
}

/// Mark of the first line holding three equal marks, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    })
}

/// Evaluate a board: a full board without a winner is a draw.
pub fn evaluate(board: &Board) -> Evaluation {
    let winner = winner(board);
    Evaluation {
        winner,
        is_draw: winner.is_none() && board.is_full(),
    }
}
