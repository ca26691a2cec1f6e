//! Records of individual diagonal additions.

use lattice_core::{CellPart, Digit, Position};
use tinyvec::TinyVec;

/// A single grid digit collected by a diagonal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Addend {
    /// The cell the digit was read from.
    pub position: Position,
    /// Which half of the cell the digit was read from.
    pub part: CellPart,
    /// The digit itself.
    pub digit: Digit,
}

/// Grid digits collected by one diagonal, upper right to lower left.
pub type Addends = TinyVec<[Addend; 8]>;

/// Where a diagonal writes its result digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum TotalSlot {
    /// Index into the totals along the bottom edge.
    Bottom(usize),
    /// Index into the totals along the left edge.
    Left(usize),
}

/// Where a diagonal writes its outgoing carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CarrySlot {
    /// Index into the carries along the right edge.
    Right(usize),
    /// Index into the carries along the top edge.
    Top(usize),
}

/// One summed anti-diagonal of the lattice.
///
/// Diagonal `0` is the lowest, rightmost diagonal; indices grow toward the
/// upper left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagonal {
    pub(crate) index: usize,
    pub(crate) carry_in: Option<u32>,
    pub(crate) addends: Addends,
    pub(crate) sum: u32,
    pub(crate) total_slot: TotalSlot,
    pub(crate) carry_slot: Option<CarrySlot>,
}

impl Diagonal {
    /// Returns the position of this diagonal in processing order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the carry received from the previous diagonal.
    ///
    /// `None` for the first diagonal, which has no predecessor.
    #[must_use]
    pub fn carry_in(&self) -> Option<u32> {
        self.carry_in
    }

    /// Returns the grid digits added on this diagonal.
    #[must_use]
    pub fn addends(&self) -> &[Addend] {
        &self.addends
    }

    /// Returns the sum of the inbound carry and all addends.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Returns the carry passed to the next diagonal (`sum div 10`).
    #[must_use]
    pub fn carry_out(&self) -> u32 {
        self.sum / 10
    }

    /// Returns the digit written to the totals (`sum mod 10`).
    #[must_use]
    pub fn digit(&self) -> Digit {
        Digit::from_remainder(self.sum)
    }

    /// Returns where the result digit is written.
    #[must_use]
    pub fn total_slot(&self) -> TotalSlot {
        self.total_slot
    }

    /// Returns where the outgoing carry is written, if it is kept.
    #[must_use]
    pub fn carry_slot(&self) -> Option<CarrySlot> {
        self.carry_slot
    }

    /// Returns the terms of the addition as written out: the inbound carry
    /// (when present) followed by the grid digits.
    ///
    /// ```
    /// use lattice_core::Operand;
    /// use lattice_solver::LatticeSolution;
    ///
    /// let solution = LatticeSolution::solve(Operand::try_from(99)?, Operand::try_from(99)?);
    /// let third = &solution.diagonals()[2];
    /// assert_eq!(third.terms(), [1, 8, 1, 8]);
    /// assert_eq!(third.sum(), 18);
    /// # Ok::<(), lattice_core::OperandError>(())
    /// ```
    #[must_use]
    pub fn terms(&self) -> Vec<u32> {
        self.carry_in
            .into_iter()
            .chain(self.addends.iter().map(|addend| u32::from(addend.digit)))
            .collect()
    }
}
