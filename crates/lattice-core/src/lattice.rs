//! The cross-product grid of digit products.

use std::ops::Index;

use crate::{Cell, Digit, Grid, Operand, Position};

/// The full lattice for one operand pair.
///
/// Column `col` belongs to multiplicand digit `col` and row `row` to
/// multiplier digit `row`; every cell holds
/// `multiplicand[col] * multiplier[row]` split into tens and ones. The
/// lattice is built once and never mutated.
///
/// # Examples
///
/// ```
/// use lattice_core::{Digit, Lattice, Operand, Position};
///
/// let lattice = Lattice::from_operands(Operand::try_from(123)?, Operand::try_from(45)?);
/// assert_eq!(lattice.columns(), 3);
/// assert_eq!(lattice.rows(), 2);
///
/// // digit 3 of the multiplicand times digit 5 of the multiplier
/// let cell = lattice[Position::new(2, 1)];
/// assert_eq!((cell.tens, cell.ones), (Digit::D1, Digit::D5));
/// # Ok::<(), lattice_core::OperandError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lattice {
    multiplicand: Vec<Digit>,
    multiplier: Vec<Digit>,
    cells: Grid<Cell>,
}

impl Lattice {
    /// Builds the lattice from two digit sequences.
    ///
    /// # Panics
    ///
    /// Panics if either sequence is empty.
    #[must_use]
    pub fn build(multiplicand: &[Digit], multiplier: &[Digit]) -> Self {
        assert!(
            !multiplicand.is_empty() && !multiplier.is_empty(),
            "operand digit sequences must not be empty"
        );
        let cells = Grid::from_fn(multiplicand.len(), multiplier.len(), |pos| {
            Cell::product_of(multiplicand[pos.col], multiplier[pos.row])
        });
        Self {
            multiplicand: multiplicand.to_vec(),
            multiplier: multiplier.to_vec(),
            cells,
        }
    }

    /// Builds the lattice for two operands.
    #[must_use]
    pub fn from_operands(multiplicand: Operand, multiplier: Operand) -> Self {
        Self::build(&multiplicand.digits(), &multiplier.digits())
    }

    /// Returns the multiplicand digits along the top edge.
    #[must_use]
    pub fn multiplicand(&self) -> &[Digit] {
        &self.multiplicand
    }

    /// Returns the multiplier digits along the right edge.
    #[must_use]
    pub fn multiplier(&self) -> &[Digit] {
        &self.multiplier
    }

    /// Returns the number of columns (multiplicand digits, `m`).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    /// Returns the number of rows (multiplier digits, `n`).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Returns the cell at `pos`, or `None` outside the lattice.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Returns the underlying cell grid.
    #[must_use]
    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }
}

impl Index<Position> for Lattice {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos]
    }
}
