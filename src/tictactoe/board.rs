//! Board snapshot and marks.

use crate::core::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One immutable 3x3 board snapshot. Squares are numbered 0..9 row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; SQUARES],
}

impl Board {
    /// A board with every square empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from raw cells.
    pub fn from_cells(cells: [Option<Mark>; SQUARES]) -> Self {
        Self { cells }
    }

    /// Parse a board from nine characters (`X`, `O`, `.`), whitespace ignored.
    ///
    /// Returns `None` if the text does not describe exactly nine squares.
    pub fn parse(text: &str) -> Option<Self> {
        let mut cells = [None; SQUARES];
        let mut count = 0;
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            if count == SQUARES {
                return None;
            }
            cells[count] = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => return None,
            };
            count += 1;
        }
        (count == SQUARES).then_some(Self { cells })
    }

    pub fn cells(&self) -> &[Option<Mark>; SQUARES] {
        &self.cells
    }

    /// Mark at `square`, or `None` if it is empty or off the board.
    pub fn get(&self, square: usize) -> Option<Mark> {
        self.cells.get(square).copied().flatten()
    }

    pub fn is_occupied(&self, square: usize) -> bool {
        self.get(square).is_some()
    }

    /// A copy of this board with `mark` placed on `square`.
    ///
    /// Callers check bounds and occupancy first; see [`crate::tictactoe::Game`].
    pub fn with_mark(&self, square: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[square] = Some(mark);
        Self { cells }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Entry for Board {
    fn summary(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', Mark::to_char))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.map_or('.', Mark::to_char))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_marks() {
        let board = Board::empty();
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert!((0..SQUARES).all(|i| board.get(i).is_none()));
    }

    #[test]
    fn with_mark_returns_new_board() {
        let board = Board::empty();
        let next = board.with_mark(4, Mark::X);

        assert_eq!(next.get(4), Some(Mark::X));
        assert!(board.get(4).is_none());
        assert_eq!(next.filled_count(), 1);
    }

    #[test]
    fn get_off_board_is_none() {
        assert_eq!(Board::empty().get(9), None);
        assert!(!Board::empty().is_occupied(42));
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn parse_reads_rows() {
        let board = Board::parse("X.O .X. ..O").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(2), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Board::parse("XO").is_none());
        assert!(Board::parse("XOXOXOXOXO").is_none());
        assert!(Board::parse("X.O/.X./..O").is_none());
    }

    #[test]
    fn display_renders_three_rows() {
        let board = Board::parse("XOX .O. ..X").unwrap();
        assert_eq!(board.to_string(), "XOX\n.O.\n..X");
    }

    #[test]
    fn summary_is_single_line() {
        let board = Board::empty().with_mark(0, Mark::O);
        assert_eq!(board.summary(), "O........");
    }
}
