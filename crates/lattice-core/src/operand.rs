//! Operands of a lattice multiplication.

use std::{
    fmt::{self, Display},
    num::NonZero,
    str::FromStr,
};

use crate::{Digit, decompose};

/// A positive integer written along one edge of the lattice.
///
/// # Examples
///
/// ```
/// use lattice_core::{Digit, Operand};
///
/// let operand: Operand = " 321 ".parse()?;
/// assert_eq!(operand.value(), 321);
/// assert_eq!(operand.digits(), [Digit::D3, Digit::D2, Digit::D1]);
///
/// assert!("".parse::<Operand>().is_err());
/// assert!("12abc".parse::<Operand>().is_err());
/// assert!("0".parse::<Operand>().is_err());
/// # Ok::<(), lattice_core::OperandError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operand(NonZero<u64>);

/// Reasons an operand text cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OperandError {
    /// The text is empty or whitespace only.
    #[display("operand is empty")]
    Empty,
    /// The text contains something other than ASCII digits.
    #[display("operand is not a number")]
    NotANumber,
    /// The value is zero.
    #[display("operand must be positive")]
    Zero,
    /// The value does not fit in 64 bits.
    #[display("operand is too large")]
    TooLarge,
}

impl Operand {
    /// The smallest operand, `1`.
    pub const MIN: Self = Self(NonZero::<u64>::MIN);

    /// Creates an operand from a positive integer.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(value: u64) -> Option<Self> {
        match NonZero::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.get()
    }

    /// Returns the digits, most significant first.
    #[must_use]
    pub fn digits(self) -> Vec<Digit> {
        decompose::digits_of(self.value())
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn digit_count(self) -> usize {
        decompose::digit_count(self.value())
    }
}

impl FromStr for Operand {
    type Err = OperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OperandError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OperandError::NotANumber);
        }
        let value = s.parse::<u64>().map_err(|_| OperandError::TooLarge)?;
        Self::new(value).ok_or(OperandError::Zero)
    }
}

impl TryFrom<u64> for Operand {
    type Error = OperandError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(OperandError::Zero)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
