//! The eight winning lines.

use serde::{Deserialize, Serialize};

/// Identifies a winning line: three rows, three columns, two diagonals.
///
/// Rows and columns carry their 0-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Horizontal line through row 0, 1 or 2.
    #[display("row {_0}")]
    Row(usize),
    /// Vertical line through column 0, 1 or 2.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right (cells 0, 4, 8).
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left (cells 2, 4, 6).
    #[display("anti diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines in scan order: rows, columns, main diagonal, anti diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three cell indices on this line, in reading order.
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::Row(r) => [r * 3, r * 3 + 1, r * 3 + 2],
            Line::Column(c) => [c, c + 3, c + 6],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(Line::Row(1).cells(), [3, 4, 5]);
        assert_eq!(Line::Column(2).cells(), [2, 5, 8]);
        assert_eq!(Line::AntiDiagonal.cells(), [2, 4, 6]);
    }

    #[test]
    fn test_center_is_on_four_lines() {
        let through_center = Line::ALL.iter().filter(|line| line.contains(4)).count();
        assert_eq!(through_center, 4);
    }
}
