//! Diagonal-by-diagonal addition over a lattice.
//!
//! The lattice has `m` columns and `n` rows. Its anti-diagonals are extended
//! past the grid edges so that there are exactly `m + n` of them, each visited
//! with the same number of steps. Diagonal `i` collects, for every row `j`,
//! the tens digit of cell `(m + n - 1 - i - j, j)` and the ones digit of the
//! cell to its left; positions outside the grid contribute nothing.
//!
//! Carries are routed the way they are written on paper: the first `n - 1`
//! diagonals end on the right edge and write their carries there
//! (`carry_right`), the following `m` diagonals end on the top edge
//! (`carry_top`). The carry of the final diagonal is never written.

use std::collections::VecDeque;

use lattice_core::{CellPart, Digit, Lattice, Position};

use crate::{Addend, Addends, CarrySlot, Diagonal, TotalSlot};

/// Result of summing every diagonal of a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagonalSummation {
    pub(crate) diagonals: Vec<Diagonal>,
    pub(crate) totals_bottom: Vec<Digit>,
    pub(crate) totals_left: Vec<Digit>,
    pub(crate) carry_right: Vec<u32>,
    pub(crate) carry_top: Vec<u32>,
}

impl DiagonalSummation {
    /// Sums all `m + n` diagonals of `lattice`, lowest right first.
    #[must_use]
    pub fn run(lattice: &Lattice) -> Self {
        let m = lattice.columns();
        let n = lattice.rows();
        let diagonal_count = m + n;

        let mut totals_bottom = VecDeque::with_capacity(m);
        let mut totals_left = VecDeque::with_capacity(n);
        let mut carry_right = VecDeque::with_capacity(n.saturating_sub(1));
        let mut carry_top = VecDeque::with_capacity(m);
        let mut diagonals: Vec<Diagonal> = Vec::with_capacity(diagonal_count);

        for i in 0..diagonal_count {
            let seed = if i < n {
                carry_right.front().copied().unwrap_or(0)
            } else {
                carry_top.front().copied().unwrap_or(0)
            };
            let carry_in = diagonals.last().map(Diagonal::carry_out);

            let addends = collect_addends(lattice, i);
            let sum = seed
                + addends
                    .iter()
                    .map(|addend| u32::from(addend.digit))
                    .sum::<u32>();
            let digit = Digit::from_remainder(sum);
            let carry = sum / 10;

            let total_slot = if i < m {
                totals_bottom.push_front(digit);
                TotalSlot::Bottom(m - 1 - i)
            } else {
                totals_left.push_front(digit);
                TotalSlot::Left(n - 1 - (i - m))
            };

            let carry_slot = if i + 1 < n {
                carry_right.push_front(carry);
                Some(CarrySlot::Right(n - 2 - i))
            } else if carry_top.len() < m {
                carry_top.push_front(carry);
                Some(CarrySlot::Top(m - carry_top.len()))
            } else {
                None
            };

            diagonals.push(Diagonal {
                index: i,
                carry_in,
                addends,
                sum,
                total_slot,
                carry_slot,
            });
        }

        // Aligns the left totals with the grid's left edge.
        while totals_left.len() < n {
            totals_left.push_front(Digit::D0);
        }

        Self {
            diagonals,
            totals_bottom: totals_bottom.into(),
            totals_left: totals_left.into(),
            carry_right: carry_right.into(),
            carry_top: carry_top.into(),
        }
    }

    /// Returns the diagonals in processing order.
    #[must_use]
    pub fn diagonals(&self) -> &[Diagonal] {
        &self.diagonals
    }

    /// Returns the digits along the bottom edge, left to right (`m` digits).
    #[must_use]
    pub fn totals_bottom(&self) -> &[Digit] {
        &self.totals_bottom
    }

    /// Returns the digits along the left edge, top to bottom (`n` digits).
    #[must_use]
    pub fn totals_left(&self) -> &[Digit] {
        &self.totals_left
    }

    /// Returns the carries along the right edge, top to bottom (`n - 1`
    /// entries).
    #[must_use]
    pub fn carry_right(&self) -> &[u32] {
        &self.carry_right
    }

    /// Returns the carries along the top edge, left to right (`m` entries).
    #[must_use]
    pub fn carry_top(&self) -> &[u32] {
        &self.carry_top
    }
}

fn collect_addends(lattice: &Lattice, i: usize) -> Addends {
    let m = lattice.columns();
    let n = lattice.rows();
    let mut addends = Addends::new();
    for row in 0..=m.max(n) {
        // Column of the cell whose tens digit lies on diagonal `i` in this row;
        // negative when the extended diagonal has already left the grid.
        let Some(col) = (m + n - 1).checked_sub(i + row) else {
            break;
        };
        let pos = Position::new(col, row);
        if let Some(cell) = lattice.get(pos) {
            addends.push(Addend {
                position: pos,
                part: CellPart::Tens,
                digit: cell.tens,
            });
        }
        if let Some(left) = pos.left()
            && let Some(cell) = lattice.get(left)
        {
            addends.push(Addend {
                position: left,
                part: CellPart::Ones,
                digit: cell.ones,
            });
        }
    }
    addends
}
