//! Core domain types for tic-tac-toe.

use super::line::Line;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Side {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer when enabled).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Taken by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns the side holding this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 board, cells in row-major order (index = row * 3 + col).
///
/// Boards are small `Copy` values. The rules engine hands back a new board
/// for every applied move instead of mutating the caller's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets a cell. Only the rules engine writes to boards.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Counts the cells held by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(side))
            .count()
    }

    /// Formats the board as a human-readable grid, empty cells numbered 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(side) => side.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of evaluating a board. Always derived from the board, never stored
/// independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// `side` completed `line`.
    Won {
        /// The winner.
        side: Side,
        /// The first completed line in scan order.
        line: Line,
    },
    /// Full board, no line completed.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::Won { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// The completed line, if the game was won.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game in progress"),
            GameStatus::Won { side, .. } => write!(f, "Player {} wins!", side),
            GameStatus::Drawn => write!(f, "Game ended in a draw!"),
        }
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse board from {input:?}: {reason}")]
pub struct BoardParseError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// Parses nine cells written as `X`, `O` and `.` (or `_`/`-` for empty).
/// Whitespace and `|` separators are ignored, so `"XO.|.X.|..O"` works.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = |reason| BoardParseError {
            input: s.to_string(),
            reason,
        };

        let mut cells = [Cell::Empty; Board::SIZE];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Side::X),
                'O' | 'o' => Cell::Occupied(Side::O),
                '.' | '_' | '-' => Cell::Empty,
                _ => return Err(error("unexpected character")),
            };
            if count == Board::SIZE {
                return Err(error("more than nine cells"));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != Board::SIZE {
            return Err(error("fewer than nine cells"));
        }
        Ok(Board::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO.|.X.|..O".parse().unwrap();
        assert_eq!(board.get(0), Some(Cell::Occupied(Side::X)));
        assert_eq!(board.get(1), Some(Cell::Occupied(Side::O)));
        assert_eq!(board.get(2), Some(Cell::Empty));
        assert_eq!(board.count(Side::X), 2);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
        assert!("XOXOXOXO?".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }
}
