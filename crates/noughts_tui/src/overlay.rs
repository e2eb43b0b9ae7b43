//! Geometry of the line drawn through a winning triple.

use noughts::Line;

/// A straight segment in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
}

impl Segment {
    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// The same segment with y measured upward from the bottom edge, as
    /// ratatui's canvas expects.
    pub fn flipped(&self, height: f64) -> Self {
        Self {
            y1: height - self.y1,
            y2: height - self.y2,
            ..*self
        }
    }
}

/// Computes the win line over a board `width` x `height` in size.
///
/// Rows run edge to edge through the middle of the row, columns top to
/// bottom through the middle of the column, diagonals corner to corner.
pub fn win_segment(line: Line, width: f64, height: f64) -> Segment {
    let cell_w = width / 3.0;
    let cell_h = height / 3.0;
    match line {
        Line::Row(r) => {
            let y = r as f64 * cell_h + cell_h / 2.0;
            Segment { x1: 0.0, y1: y, x2: width, y2: y }
        }
        Line::Column(c) => {
            let x = c as f64 * cell_w + cell_w / 2.0;
            Segment { x1: x, y1: 0.0, x2: x, y2: height }
        }
        Line::MainDiagonal => Segment { x1: 0.0, y1: 0.0, x2: width, y2: height },
        Line::AntiDiagonal => Segment { x1: width, y1: 0.0, x2: 0.0, y2: height },
    }
}
