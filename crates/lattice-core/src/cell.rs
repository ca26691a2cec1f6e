//! Lattice cells: single-digit products split into tens and ones.

use std::fmt::{self, Display};

use crate::Digit;

/// The product of one multiplicand digit and one multiplier digit, written
/// as a tens digit (upper-left half of the cell) and a ones digit (lower-right
/// half).
///
/// # Examples
///
/// ```
/// use lattice_core::{Cell, Digit};
///
/// let cell = Cell::product_of(Digit::D3, Digit::D5);
/// assert_eq!(cell.tens, Digit::D1);
/// assert_eq!(cell.ones, Digit::D5);
/// assert_eq!(cell.product(), 15);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Tens digit of the product.
    pub tens: Digit,
    /// Ones digit of the product.
    pub ones: Digit,
}

/// One half of a [`Cell`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellPart {
    /// The tens digit (above the cell's diagonal).
    #[default]
    Tens,
    /// The ones digit (below the cell's diagonal).
    Ones,
}

impl Cell {
    /// Multiplies two digits and splits the product.
    #[must_use]
    pub fn product_of(multiplicand: Digit, multiplier: Digit) -> Self {
        let product = multiplicand.value() * multiplier.value();
        Self {
            tens: Digit::from_value(product / 10),
            ones: Digit::from_value(product % 10),
        }
    }

    /// Returns the product this cell encodes (0-81).
    #[must_use]
    pub const fn product(self) -> u8 {
        self.tens.value() * 10 + self.ones.value()
    }

    /// Returns the digit in the given half.
    #[must_use]
    pub const fn part(self, part: CellPart) -> Digit {
        match part {
            CellPart::Tens => self.tens,
            CellPart::Ones => self.ones,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.ones)
    }
}
