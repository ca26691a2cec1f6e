//! Animation delays for drawing a lattice.
//!
//! The surface draws a frame of `(columns + 1) x (rows + 1)` boxes: the grid
//! itself plus the totals row below it and the totals column to its left.
//! Every element fades in after a delay from this schedule, so the grid
//! appears edge by edge and its diagonals sweep in from the lower right.

use std::time::Duration;

use crate::settings::RevealTiming;

/// One of the four outline edges of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
}

/// Reveal delays for a lattice of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    columns: usize,
    rows: usize,
    timing: RevealTiming,
}

impl RevealSchedule {
    /// Creates the schedule for a `columns x rows` lattice.
    #[must_use]
    pub fn new(columns: usize, rows: usize, timing: RevealTiming) -> Self {
        Self {
            columns,
            rows,
            timing,
        }
    }

    /// Delay of operand digit `index` (the same for both operands).
    #[must_use]
    pub fn operand_digit(&self, index: usize) -> Duration {
        self.timing.unit * to_u32(2 * index + 1)
    }

    /// Delay of an outline edge.
    #[must_use]
    pub fn edge(&self, edge: Edge) -> Duration {
        let order = match edge {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        };
        self.timing.unit * order
    }

    /// Delay of the inner horizontal line below row `row - 1`.
    #[must_use]
    pub fn inner_horizontal(&self, row: usize) -> Duration {
        self.timing.line_stagger * to_u32(row) + self.timing.unit * 4
    }

    /// Delay of the inner vertical line right of column `col - 1`.
    ///
    /// Vertical lines start after the horizontal ones.
    #[must_use]
    pub fn inner_vertical(&self, col: usize) -> Duration {
        self.timing.unit * to_u32(self.rows.saturating_sub(1))
            + self.timing.line_stagger * to_u32(col)
            + self.timing.unit * 4
    }

    /// Delay of the grid body, once the outline and inner lines are drawn.
    #[must_use]
    pub fn grid_body(&self) -> Duration {
        grid_duration(self.timing, self.rows)
    }

    /// Delay of the diagonal segment in the left totals column at frame row
    /// `row` (`0..=rows`).
    #[must_use]
    pub fn left_segment(&self, row: usize) -> Duration {
        self.segment(1, row + 1)
    }

    /// Delay of the diagonal segment in grid column `col` at frame row `row`
    /// (`row == rows` is the totals row).
    #[must_use]
    pub fn cell_segment(&self, col: usize, row: usize) -> Duration {
        self.segment(col + 2, row + 1)
    }

    /// Counts the frame points that draw before segment `(c, r)`: those past
    /// its anti-diagonal, and those on it further up and to the right.
    fn segment(&self, c: usize, r: usize) -> Duration {
        let m = self.columns + 1;
        let n = self.rows + 1;
        let count = (1..=m)
            .flat_map(|i| (1..=n).map(move |j| (i, j)))
            .filter(|&(i, j)| i + j > r + c || (i + j == r + c && j > c))
            .count();
        self.timing.diagonal_stagger * to_u32(count) + grid_duration(self.timing, n)
    }
}

fn grid_duration(timing: RevealTiming, rows: usize) -> Duration {
    timing.unit * to_u32((rows + 1) * 2 + 1)
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
